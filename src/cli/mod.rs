//! Command line interface
//!
//! Argument parsing lives in [`args`]; this module drives the docs engine
//! and renders the results. Rendering never panics: an error-tagged schema
//! prints the endpoint's error and maps to a dedicated exit status.

pub mod args;

use console::style;
use serde_json::json;

use crate::client::IntrospectionClient;
use crate::docs::{DocsContext, OperationDocs};
use crate::errors::Result;
use crate::schema::model::Tab;
use crate::schema::SchemaModel;
use crate::status::ExitStatus;

pub use args::{Args, KindArg, VerifyArg};

/// Run the CLI to completion
pub async fn run(args: Args) -> Result<ExitStatus> {
    let client =
        IntrospectionClient::new(&args.endpoint, args.timeout, args.accept_invalid_certs())?;

    if args.verify == VerifyArg::Yes {
        client.probe().await?;
    }

    let ctx = DocsContext::new(client);
    let model = ctx.schema().await;

    if let Some(error) = &model.error {
        if args.json {
            println!("{}", json!({ "error": error }));
        } else {
            eprintln!("{} {}", style("schema error:").red().bold(), error);
        }
        return Ok(ExitStatus::SchemaError);
    }

    if let Some(operation) = &args.operation {
        let docs = ctx
            .operation_docs(operation, args.kind.map(Into::into), args.depth)
            .await?;
        if args.json {
            print_operation_json(&docs);
        } else {
            print_operation(&docs);
        }
        return Ok(ExitStatus::Success);
    }

    if let Some(tab) = &args.tab {
        let tab: Tab = tab.parse()?;
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&model.tab_slice(tab)).unwrap_or_default()
            );
        } else {
            print_tab(model, tab);
        }
        return Ok(ExitStatus::Success);
    }

    if args.json {
        print_overview_json(model);
    } else {
        print_overview(ctx.endpoint(), model);
    }
    Ok(ExitStatus::Success)
}

fn print_operation_json(docs: &OperationDocs) {
    let payload = json!({
        "name": docs.name,
        "kind": docs.kind.keyword(),
        "description": docs.description,
        "deprecated": docs.is_deprecated,
        "deprecationReason": docs.deprecation_reason,
        "returnType": docs.return_type,
        "query": docs.sample.query_text,
        "variables": docs.sample.variables,
        "sampleResponse": docs.sample_response,
        "responseFields": docs.response_fields,
        "snippets": {
            "curl": docs.snippets.curl,
            "javascript": docs.snippets.javascript,
            "python": docs.snippets.python,
        },
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).unwrap_or_default()
    );
}

fn print_operation(docs: &OperationDocs) {
    println!(
        "{} {} {}",
        style(docs.kind.keyword()).cyan(),
        style(&docs.name).bold(),
        docs.return_type
            .as_deref()
            .map(|t| format!("-> {}", t))
            .unwrap_or_default()
    );
    println!("  {}", docs.description);
    if docs.is_deprecated {
        let reason = docs.deprecation_reason.as_deref().unwrap_or("no reason given");
        println!("  {} {}", style("deprecated:").yellow().bold(), reason);
    }

    println!("\n{}", style("Sample operation").green().bold());
    println!("{}", docs.sample.query_text);

    if let Some(variables) = &docs.sample.variables {
        println!("\n{}", style("Example variables").green().bold());
        println!(
            "{}",
            serde_json::to_string_pretty(variables).unwrap_or_default()
        );
    }

    println!("\n{}", style("Sample response").green().bold());
    println!(
        "{}",
        serde_json::to_string_pretty(&docs.sample_response).unwrap_or_default()
    );

    if !docs.response_fields.is_empty() {
        println!("\n{}", style("Response fields").green().bold());
        for row in &docs.response_fields {
            let mut flags = Vec::new();
            if row.required {
                flags.push("required");
            }
            if row.list {
                flags.push("list");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            println!(
                "  {} {} {}{}",
                style(&row.path).bold(),
                style(&row.ty).cyan(),
                row.description,
                flags
            );
        }
    }

    println!("\n{}", style("curl").green().bold());
    println!("{}", docs.snippets.curl);
    println!("\n{}", style("JavaScript").green().bold());
    println!("{}", docs.snippets.javascript);
    println!("\n{}", style("Python").green().bold());
    println!("{}", docs.snippets.python);
}

fn print_tab(model: &SchemaModel, tab: Tab) {
    match tab {
        Tab::Mutations => {
            println!("{}", style("Mutations").green().bold());
            for (name, field) in &model.mutations {
                println!(
                    "  {} {} {}",
                    style(name).bold(),
                    style(&field.ty).cyan(),
                    field.description
                );
            }
        }
        Tab::Types => {
            println!("{}", style("Types").green().bold());
            for (name, entry) in &model.types {
                match entry.fields() {
                    Some(fields) => println!("  {} ({} fields)", style(name).bold(), fields.len()),
                    None => println!("  {} (scalar)", style(name).bold()),
                }
            }
        }
        Tab::InputTypes => {
            println!("{}", style("Input types").green().bold());
            for (name, fields) in &model.input_types {
                println!("  {} ({} fields)", style(name).bold(), fields.len());
            }
        }
        Tab::EnumTypes => {
            println!("{}", style("Enum types").green().bold());
            for (name, values) in &model.enum_types {
                let names: Vec<&str> = values.keys().map(String::as_str).collect();
                println!("  {}: {}", style(name).bold(), names.join(", "));
            }
        }
    }
}

fn print_overview_json(model: &SchemaModel) {
    let payload = json!({
        "totalQueries": model.total_queries(),
        "totalMutations": model.total_mutations(),
        "totalTypes": model.total_types(),
        "totalInputTypes": model.total_input_types(),
        "totalEnumTypes": model.total_enum_types(),
        "queries": model.queries.keys().collect::<Vec<_>>(),
        "mutations": model.mutations.keys().collect::<Vec<_>>(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).unwrap_or_default()
    );
}

fn print_overview(endpoint: &str, model: &SchemaModel) {
    println!("{} {}", style("Endpoint:").bold(), endpoint);
    println!(
        "{} queries, {} mutations, {} types, {} input types, {} enums\n",
        model.total_queries(),
        model.total_mutations(),
        model.total_types(),
        model.total_input_types(),
        model.total_enum_types()
    );

    println!("{}", style("Queries").green().bold());
    for (name, field) in &model.queries {
        println!("  {} {}", style(name).bold(), field.description);
    }
    println!("\n{}", style("Mutations").green().bold());
    for (name, field) in &model.mutations {
        println!("  {} {}", style(name).bold(), field.description);
    }
}
