//! Sample response synthesis
//!
//! Builds an example JSON response envelope for an operation by walking its
//! return type in the schema model and inventing plausible scalar values
//! from field-name heuristics. Depth-bounded the same way query synthesis
//! is, so cyclic types terminate.

use serde_json::{json, Map, Value as JsonValue};

use crate::schema::model::{clean_type_name, ucfirst, OperationKind, SchemaModel};

/// Recursion ceiling for response expansion
const MAX_RESPONSE_DEPTH: usize = 5;

/// Collection-shaped fields skipped once the depth ceiling is reached, to
/// keep the deepest samples readable
const COLLECTION_FIELDS: &[&str] = &["items", "products", "categories", "addresses", "bundle_options"];

/// Build a `{"data": {...}}` sample envelope for the operation
pub fn build_sample_response(model: &SchemaModel, name: &str, kind: OperationKind) -> JsonValue {
    let sample = match model.return_type(name, kind) {
        Some(return_type) => sample_for_type(model, return_type, name, 1),
        None => JsonValue::Null,
    };
    json!({ "data": { name: sample } })
}

/// Example value for a canonical type string
fn sample_for_type(model: &SchemaModel, type_string: &str, field_name: &str, depth: usize) -> JsonValue {
    if depth > MAX_RESPONSE_DEPTH {
        return JsonValue::Null;
    }

    let clean = clean_type_name(type_string);

    if type_string.contains('[') {
        let first = element_sample(model, &clean, field_name, depth);
        let second = element_sample(model, &clean, field_name, depth);
        return json!([first, second]);
    }

    element_sample(model, &clean, field_name, depth)
}

fn element_sample(model: &SchemaModel, type_name: &str, field_name: &str, depth: usize) -> JsonValue {
    if let Some(fields) = model.object_fields(type_name) {
        return object_sample(model, fields, depth);
    }
    if let Some(values) = model.enum_type_structure(type_name) {
        return values
            .keys()
            .next()
            .map(|v| json!(v))
            .unwrap_or(JsonValue::Null);
    }
    scalar_sample(type_name, field_name)
}

fn object_sample(
    model: &SchemaModel,
    fields: &indexmap::IndexMap<String, crate::schema::model::FieldDescriptor>,
    depth: usize,
) -> JsonValue {
    let mut object = Map::new();
    for (field_name, field) in fields {
        if depth > MAX_RESPONSE_DEPTH && COLLECTION_FIELDS.contains(&field_name.as_str()) {
            continue;
        }
        object.insert(
            field_name.clone(),
            sample_for_type(model, &field.ty, field_name, depth + 1),
        );
    }
    JsonValue::Object(object)
}

/// Scalar example by type, refined with case-insensitive field-name matches
fn scalar_sample(type_name: &str, field_name: &str) -> JsonValue {
    let lower = field_name.to_lowercase();
    match type_name {
        "String" | "ID" => {
            if lower.contains("id") {
                json!("1")
            } else if lower.contains("email") {
                json!("customer@example.com")
            } else if lower.contains("name") {
                json!(format!("Sample {}", ucfirst(field_name)))
            } else if lower.contains("url") {
                json!("sample-url-key")
            } else if lower.contains("sku") {
                json!("sample-sku")
            } else {
                json!("sample_value")
            }
        }
        "Int" => {
            if lower.contains("quantity") {
                json!(2)
            } else if lower.contains("page") {
                json!(1)
            } else {
                json!(123)
            }
        }
        "Float" => {
            if lower.contains("price") || lower.contains("amount") {
                json!(29.99)
            } else {
                json!(123.45)
            }
        }
        "Boolean" => json!(true),
        other => json!(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::introspection::IntrospectionDocument;

    fn sample_model() -> SchemaModel {
        let doc: IntrospectionDocument = serde_json::from_value(json!({
            "types": [
                {
                    "kind": "OBJECT",
                    "name": "Query",
                    "fields": [
                        {"name": "customer", "type": {"kind": "OBJECT", "name": "Customer"}},
                        {"name": "categories", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "Category"}}},
                        {"name": "storeName", "type": {"kind": "SCALAR", "name": "String"}}
                    ]
                },
                {
                    "kind": "OBJECT",
                    "name": "Customer",
                    "fields": [
                        {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}},
                        {"name": "email", "type": {"kind": "SCALAR", "name": "String"}},
                        {"name": "is_subscribed", "type": {"kind": "SCALAR", "name": "Boolean"}},
                        {"name": "status", "type": {"kind": "ENUM", "name": "CustomerStatus"}}
                    ]
                },
                {
                    "kind": "OBJECT",
                    "name": "Category",
                    "fields": [
                        {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}},
                        {"name": "name", "type": {"kind": "SCALAR", "name": "String"}},
                        {"name": "children", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "Category"}}},
                        {"name": "items", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "Category"}}}
                    ]
                },
                {
                    "kind": "ENUM",
                    "name": "CustomerStatus",
                    "enumValues": [{"name": "ACTIVE"}, {"name": "DISABLED"}]
                }
            ]
        }))
        .unwrap();
        SchemaModel::from_introspection(&doc)
    }

    #[test]
    fn test_envelope_shape() {
        let model = sample_model();
        let response = build_sample_response(&model, "customer", OperationKind::Query);
        let customer = &response["data"]["customer"];
        assert_eq!(customer["id"], json!("1"));
        assert_eq!(customer["email"], json!("customer@example.com"));
        assert_eq!(customer["is_subscribed"], json!(true));
        assert_eq!(customer["status"], json!("ACTIVE"));
    }

    #[test]
    fn test_list_return_type_yields_two_elements() {
        let model = sample_model();
        let response = build_sample_response(&model, "categories", OperationKind::Query);
        let categories = response["data"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0]["name"], json!("Sample Name"));
    }

    #[test]
    fn test_cyclic_type_terminates() {
        let model = sample_model();
        // Category.children references Category; expansion must bottom out
        let response = build_sample_response(&model, "categories", OperationKind::Query);
        let text = response.to_string();
        assert!(text.len() < 100_000);
    }

    #[test]
    fn test_collection_fields_retained_until_depth_ceiling() {
        let model = sample_model();
        let response = build_sample_response(&model, "categories", OperationKind::Query);

        // mid-depth objects keep collection-shaped fields like `items`
        let mid = &response["data"]["categories"][0]["children"][0];
        assert!(mid.get("items").is_some());
        assert!(mid["items"][0].get("items").is_some());

        // only the ceiling bounds the expansion: depth-4 objects still carry
        // their collections, whose elements then bottom out
        let deep = &mid["children"][0]["children"][0];
        assert_eq!(deep["id"], json!("1"));
        assert!(deep.get("items").is_some());
        assert_eq!(deep["items"][0]["id"], JsonValue::Null);
    }

    #[test]
    fn test_unknown_operation_is_null() {
        let model = sample_model();
        let response = build_sample_response(&model, "missing", OperationKind::Query);
        assert_eq!(response["data"]["missing"], JsonValue::Null);
    }

    #[test]
    fn test_scalar_heuristics() {
        assert_eq!(scalar_sample("String", "url_key"), json!("sample-url-key"));
        assert_eq!(scalar_sample("String", "sku"), json!("sample-sku"));
        assert_eq!(scalar_sample("String", "comment"), json!("sample_value"));
        assert_eq!(scalar_sample("Int", "quantity"), json!(2));
        assert_eq!(scalar_sample("Int", "current_page"), json!(1));
        assert_eq!(scalar_sample("Float", "base_price"), json!(29.99));
        assert_eq!(scalar_sample("Money", "total"), json!("Money"));
    }
}
