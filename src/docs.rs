//! Documentation engine
//!
//! Ties the pieces together: fetches the schema once per context (memoized
//! behind a `tokio::sync::OnceCell`, so repeated lookups reuse the same
//! introspection round trip) and bundles everything the renderer needs for
//! one operation into [`OperationDocs`].

use serde_json::Value as JsonValue;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::client::IntrospectionClient;
use crate::errors::{GqldocsError, Result};
use crate::schema::model::{clean_type_name, FieldDescriptor, OperationKind};
use crate::schema::SchemaModel;
use crate::synth::{
    build_sample_operation, build_sample_response, generate_snippets, ClientSnippets,
    SampleOperation,
};

/// Nesting ceiling for the response field table
const FIELD_DOC_DEPTH: usize = 2;

/// Request-scoped documentation context.
///
/// The schema is fetched lazily on first use and cached for the lifetime of
/// the context; the endpoint is introspected at most once.
pub struct DocsContext {
    client: IntrospectionClient,
    schema: OnceCell<SchemaModel>,
}

/// One row of the response field table
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResponseFieldDoc {
    pub path: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    pub required: bool,
    pub list: bool,
}

/// Everything needed to document one operation
#[derive(Debug, Clone)]
pub struct OperationDocs {
    pub name: String,
    pub kind: OperationKind,
    pub description: String,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
    pub return_type: Option<String>,
    pub sample: SampleOperation,
    pub sample_response: JsonValue,
    pub snippets: ClientSnippets,
    pub response_fields: Vec<ResponseFieldDoc>,
}

impl DocsContext {
    pub fn new(client: IntrospectionClient) -> Self {
        DocsContext {
            client,
            schema: OnceCell::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// The normalized schema, fetched on first call and cached after
    pub async fn schema(&self) -> &SchemaModel {
        self.schema
            .get_or_init(|| async {
                debug!("fetching schema for documentation context");
                self.client.fetch_schema().await
            })
            .await
    }

    /// Full documentation bundle for one operation.
    ///
    /// Errors when the schema itself is error-tagged or the operation does
    /// not exist; synthesis itself never fails.
    pub async fn operation_docs(
        &self,
        name: &str,
        kind: Option<OperationKind>,
        max_depth: usize,
    ) -> Result<OperationDocs> {
        let model = self.schema().await;
        if let Some(error) = &model.error {
            return Err(GqldocsError::Schema(error.clone()));
        }

        let Some((kind, field)) = model.operation(name, kind) else {
            return Err(GqldocsError::Argument(format!(
                "Unknown operation '{}'",
                name
            )));
        };

        let sample = build_sample_operation(model, name, kind, &field.args, max_depth);
        let sample_response = build_sample_response(model, name, kind);
        let snippets = generate_snippets(self.endpoint(), name, &sample);
        let response_fields = response_field_docs(model, field);

        Ok(OperationDocs {
            name: name.to_string(),
            kind,
            description: field.description.clone(),
            is_deprecated: field.is_deprecated,
            deprecation_reason: field.deprecation_reason.clone(),
            return_type: Some(field.ty.clone()),
            sample,
            sample_response,
            snippets,
            response_fields,
        })
    }
}

/// Flatten the operation's return type into dotted-path rows, two levels
/// deep
fn response_field_docs(model: &SchemaModel, operation: &FieldDescriptor) -> Vec<ResponseFieldDoc> {
    let mut rows = Vec::new();
    let return_type = clean_type_name(&operation.ty);
    if let Some(fields) = model.object_fields(&return_type) {
        collect_field_docs(model, fields, "", 1, &mut rows);
    }
    rows
}

fn collect_field_docs(
    model: &SchemaModel,
    fields: &indexmap::IndexMap<String, FieldDescriptor>,
    prefix: &str,
    depth: usize,
    rows: &mut Vec<ResponseFieldDoc>,
) {
    for (name, field) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        rows.push(ResponseFieldDoc {
            ty: field.ty.clone(),
            description: field.description.clone(),
            required: field.is_required(),
            list: field.is_list(),
            path: path.clone(),
        });

        if depth < FIELD_DOC_DEPTH {
            let nested = clean_type_name(&field.ty);
            if let Some(nested_fields) = model.object_fields(&nested) {
                collect_field_docs(model, nested_fields, &path, depth + 1, rows);
            }
        }
    }
}
