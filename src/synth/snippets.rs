//! Ready-to-run client snippets
//!
//! Renders a synthesized sample operation as copy-pasteable curl,
//! JavaScript (fetch) and Python (requests) invocations against the target
//! endpoint. Operations whose names suggest a protected surface get a
//! placeholder auth header.

use serde_json::{json, Value as JsonValue};

use super::query::SampleOperation;

/// The three rendered client invocations for one operation
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSnippets {
    pub curl: String,
    pub javascript: String,
    pub python: String,
}

/// Render all snippets for an operation against `endpoint`
pub fn generate_snippets(endpoint: &str, name: &str, sample: &SampleOperation) -> ClientSnippets {
    let payload = request_payload(sample);
    ClientSnippets {
        curl: curl_snippet(endpoint, name, &payload),
        javascript: javascript_snippet(endpoint, name, sample),
        python: python_snippet(endpoint, name, sample),
    }
}

/// The POST body: query text plus variables when the operation takes any
fn request_payload(sample: &SampleOperation) -> JsonValue {
    match &sample.variables {
        Some(variables) => json!({"query": sample.query_text, "variables": variables}),
        None => json!({"query": sample.query_text}),
    }
}

/// Placeholder auth header for operations that look token-protected,
/// matched on name substrings
fn auth_header(name: &str) -> Option<(&'static str, &'static str)> {
    let lower = name.to_lowercase();
    if lower.contains("admin") {
        Some(("Authorization", "YOUR_ADMIN_TOKEN_HERE"))
    } else if lower.contains("cashier") || lower.contains("pos") {
        Some(("pos-token", "YOUR_POS_TOKEN_HERE"))
    } else if lower.contains("portal") {
        Some(("principal-token", "YOUR_PRINCIPAL_TOKEN_HERE"))
    } else {
        None
    }
}

fn curl_snippet(endpoint: &str, name: &str, payload: &JsonValue) -> String {
    let mut command = format!(
        "curl -X POST \\\n  '{}' \\\n  -H 'Content-Type: application/json' \\\n  -H 'Accept: application/json'",
        endpoint
    );
    if let Some((header, value)) = auth_header(name) {
        command.push_str(&format!(" \\\n  -H '{}: {}'", header, value));
    }
    command.push_str(&format!(" \\\n  -d '{}'", payload));
    command
}

fn javascript_snippet(endpoint: &str, name: &str, sample: &SampleOperation) -> String {
    let mut headers = String::from("    'Content-Type': 'application/json',");
    if let Some((header, value)) = auth_header(name) {
        headers.push_str(&format!("\n    '{}': '{}',", header, value));
    }

    let variables_line = match &sample.variables {
        Some(variables) => format!("\n    variables: {},", variables),
        None => String::new(),
    };

    format!(
        "const response = await fetch('{}', {{\n  method: 'POST',\n  headers: {{\n{}\n  }},\n  body: JSON.stringify({{\n    query: `{}`,{}\n  }}),\n}});\n\nconst result = await response.json();\nconsole.log(result);",
        endpoint, headers, sample.query_text, variables_line
    )
}

fn python_snippet(endpoint: &str, name: &str, sample: &SampleOperation) -> String {
    let mut headers = String::from("\"Content-Type\": \"application/json\"");
    if let Some((header, value)) = auth_header(name) {
        headers.push_str(&format!(", \"{}\": \"{}\"", header, value));
    }

    let variables_line = match &sample.variables {
        Some(variables) => format!("\n    \"variables\": {},", py_literal(variables)),
        None => String::new(),
    };

    format!(
        "import requests\n\npayload = {{\n    \"query\": \"\"\"{}\"\"\",{}\n}}\n\nresponse = requests.post(\n    \"{}\",\n    json=payload,\n    headers={{{}}},\n)\nprint(response.json())",
        sample.query_text, variables_line, endpoint, headers
    )
}

/// Format a JSON value as a Python literal (`True`/`False`/`None` instead
/// of the JSON keywords)
fn py_literal(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "None".to_string(),
        JsonValue::Bool(true) => "True".to_string(),
        JsonValue::Bool(false) => "False".to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s)),
        JsonValue::Array(items) => {
            let rendered: Vec<String> = items.iter().map(py_literal).collect();
            format!("[{}]", rendered.join(", "))
        }
        JsonValue::Object(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(k, v)| {
                    let key = serde_json::to_string(k).unwrap_or_else(|_| format!("\"{}\"", k));
                    format!("{}: {}", key, py_literal(v))
                })
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}
