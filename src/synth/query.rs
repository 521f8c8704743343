//! Sample query/mutation synthesis
//!
//! Builds a runnable sample operation for any query or mutation in the
//! schema model: recursively expanded selection sets bounded by a depth
//! limit, variable declarations typed from the argument metadata, an
//! example variables document, and an optional named fragment for complex
//! return types.

use indexmap::IndexMap;
use serde_json::{json, Value as JsonValue};

use crate::schema::model::{clean_type_name, ucfirst, ArgumentDescriptor, OperationKind, SchemaModel};

/// Recursion ceiling for selection-set expansion
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Fragments stay shallow for readability
const FRAGMENT_DEPTH: usize = 2;

/// Return types that get a dedicated fragment and are never expanded once
/// the depth ceiling is reached
const COMPLEX_TYPES: &[&str] = &["ProductInterface", "CategoryTree", "Customer", "Cart", "Order"];

/// Selection templates for common root operations whose return type is not
/// resolvable from the model, keyed by lowercased operation name
const FIELD_TEMPLATES: &[(&str, &str)] = &[
    ("products", "items {\n      id\n      name\n      sku\n      price {\n        regularPrice {\n          amount {\n            value\n            currency\n          }\n        }\n      }\n    }\n    total_count\n    page_info {\n      total_pages\n      current_page\n    }"),
    ("product", "id\n    name\n    sku\n    description {\n      html\n    }\n    price {\n      regularPrice {\n        amount {\n          value\n          currency\n        }\n      }\n    }\n    media_gallery {\n      url\n      label\n    }"),
    ("categories", "items {\n      id\n      name\n      url_key\n      image\n      description\n      children {\n        id\n        name\n      }\n    }\n    total_count"),
    ("category", "id\n    name\n    description\n    image\n    url_key\n    products {\n      items {\n        id\n        name\n        sku\n        price {\n          regularPrice {\n            amount {\n              value\n              currency\n            }\n          }\n        }\n      }\n    }"),
    ("customers", "items {\n      id\n      firstname\n      lastname\n      email\n      created_at\n    }\n    total_count"),
    ("customer", "id\n    firstname\n    lastname\n    email\n    created_at\n    addresses {\n      id\n      firstname\n      lastname\n      street\n      city\n      telephone\n      postcode\n      country_code\n    }"),
    ("cart", "id\n    items {\n      id\n      product {\n        name\n        sku\n        price {\n          regularPrice {\n            amount {\n              value\n              currency\n            }\n          }\n        }\n      }\n      quantity\n      prices {\n        price {\n          value\n          currency\n        }\n        row_total {\n          value\n          currency\n        }\n      }\n    }\n    total_quantity\n    prices {\n      grand_total {\n        value\n        currency\n      }\n      subtotal_excluding_tax {\n        value\n        currency\n      }\n    }"),
    ("cmspage", "id\n    title\n    content\n    content_heading\n    meta_title\n    meta_description\n    url_key"),
    ("cmsblocks", "items {\n      id\n      title\n      content\n      identifier\n    }"),
    ("storeconfig", "id\n    base_currency_code\n    default_display_currency_code\n    timezone\n    weight_unit\n    base_media_url\n    secure_base_media_url"),
];

/// Fallback selections for common nested types absent from the model
const COMMON_TYPE_FIELDS: &[(&str, &str)] = &[
    ("ProductInterface", "id\n    name\n    sku\n    price {\n      regularPrice {\n        amount {\n          value\n          currency\n        }\n      }\n    }"),
    ("CategoryTree", "id\n    name\n    url_key\n    description"),
    ("Customer", "id\n    firstname\n    lastname\n    email"),
    ("Cart", "id\n    total_quantity\n    prices {\n      grand_total {\n        value\n        currency\n      }\n    }"),
    ("Money", "value\n    currency"),
    ("PriceRange", "minimum_price {\n      regular_price {\n        value\n        currency\n      }\n    }\n    maximum_price {\n      regular_price {\n        value\n        currency\n      }\n    }"),
];

/// Hand-written fragments for well-known mutations
const MUTATION_FRAGMENTS: &[(&str, &str)] = &[
    ("addBundleProductsToCart", "fragment CartFragment on Cart {\n  id\n  items {\n    id\n    product {\n      id\n      name\n      sku\n    }\n    quantity\n    ... on BundleCartItem {\n      bundle_options {\n        id\n        label\n        values {\n          id\n          label\n          price\n          quantity\n        }\n      }\n    }\n  }\n  prices {\n    grand_total {\n      value\n      currency\n    }\n  }\n}"),
    ("addSimpleProductsToCart", "fragment CartFragment on Cart {\n  id\n  items {\n    id\n    product {\n      id\n      name\n      sku\n    }\n    quantity\n    prices {\n      price {\n        value\n        currency\n      }\n    }\n  }\n}"),
    ("createEmptyCart", "fragment CartFragment on Cart {\n  id\n  total_quantity\n}"),
    ("createCustomer", "fragment CustomerOutputFragment on CustomerOutput {\n  customer {\n    id\n    firstname\n    lastname\n    email\n  }\n}"),
    ("placeOrder", "fragment OrderFragment on PlaceOrderOutput {\n  order {\n    order_number\n    id\n    grand_total\n    status\n  }\n}"),
];

/// Per-fragment-map entries for common root queries
const QUERY_FRAGMENT_TYPES: &[(&str, &str)] = &[
    ("products", "Products"),
    ("product", "ProductInterface"),
    ("categories", "CategoryResult"),
    ("category", "CategoryTree"),
    ("customer", "Customer"),
    ("cart", "Cart"),
];

/// Example variable values for well-known argument names
const VARIABLE_EXAMPLES: &[(&str, &str)] = &[
    ("cartId", "your_cart_id"),
    ("sku", "product-sku"),
    ("email", "customer@example.com"),
    ("password", "password123"),
    ("firstname", "John"),
    ("lastname", "Doe"),
    ("search", "ABC"),
];

/// A synthesized sample operation: the GraphQL document plus an example
/// variables payload (absent when the operation takes no arguments).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOperation {
    pub query_text: String,
    pub variables: Option<JsonValue>,
}

/// Build a sample operation for `name`, purely from the schema model.
pub fn build_sample_operation(
    model: &SchemaModel,
    name: &str,
    kind: OperationKind,
    args: &IndexMap<String, ArgumentDescriptor>,
    max_depth: usize,
) -> SampleOperation {
    let return_type = model.return_type(name, kind).map(str::to_string);
    let fields = sample_fields(model, name, return_type.as_deref(), max_depth);

    let mut operation = format!("{} {}{}", kind.keyword(), ucfirst(name), kind.label());

    if !args.is_empty() {
        let declarations: Vec<String> = args
            .values()
            .map(|arg| format!("  ${}: {}", arg.name, arg.ty))
            .collect();
        operation.push_str(&format!("(\n{}\n)", declarations.join("\n")));
    }

    let bindings = if args.is_empty() {
        String::new()
    } else {
        let refs: Vec<String> = args
            .keys()
            .map(|arg_name| format!("{}: ${}", arg_name, arg_name))
            .collect();
        format!("({})", refs.join(", "))
    };

    operation.push_str(&format!(
        " {{\n  {}{} {{\n    {}\n  }}\n}}",
        name, bindings, fields
    ));

    let fragment = match kind {
        OperationKind::Query => fragment_for_query(model, name, return_type.as_deref()),
        OperationKind::Mutation => fragment_for_mutation(name),
    };
    if let Some(fragment) = fragment {
        operation.push_str("\n\n");
        operation.push_str(&fragment);
    }

    SampleOperation {
        query_text: operation,
        variables: variables_example(args),
    }
}

/// Selection set for the operation's return type.
///
/// Resolvable object types are expanded recursively; otherwise a fixed
/// per-operation template is tried, then a generic default selection.
fn sample_fields(model: &SchemaModel, name: &str, return_type: Option<&str>, max_depth: usize) -> String {
    if let Some(return_type) = return_type {
        if model.is_known_type(return_type) {
            return fields_from_type(model, return_type, max_depth);
        }
    }

    let lower = name.to_lowercase();
    if let Some((_, template)) = FIELD_TEMPLATES.iter().find(|(key, _)| *key == lower) {
        return (*template).to_string();
    }

    default_fields(return_type)
}

fn fields_from_type(model: &SchemaModel, type_string: &str, max_depth: usize) -> String {
    let clean = clean_type_name(type_string);
    if let Some(fields) = model.object_fields(&clean) {
        return build_fields_recursive(model, fields, 1, max_depth);
    }
    default_fields(Some(type_string))
}

/// Recursively expand a field map into selection lines.
///
/// Fields past the depth ceiling are emitted as bare leaf selections, never
/// dropped, so the generated query always closes every brace.
fn build_fields_recursive(
    model: &SchemaModel,
    fields: &IndexMap<String, crate::schema::model::FieldDescriptor>,
    depth: usize,
    max_depth: usize,
) -> String {
    if depth > max_depth {
        return String::new();
    }

    let indent = "  ".repeat(depth);
    let mut lines = Vec::new();

    for (field_name, field) in fields {
        if depth >= max_depth && is_complex_type(&field.ty) {
            lines.push(format!("{}{}", indent, field_name));
            continue;
        }

        let mut line = field_name.clone();
        if depth < max_depth && model.is_object_type(&field.ty) {
            let nested_type = clean_type_name(&field.ty);
            let nested = nested_fields_for_type(model, &nested_type, depth + 1, max_depth);
            if !nested.is_empty() {
                line.push_str(&format!(" {{\n{}\n{}}}", nested, indent));
            }
        }
        lines.push(format!("{}{}", indent, line));
    }

    lines.join("\n")
}

fn nested_fields_for_type(
    model: &SchemaModel,
    type_name: &str,
    depth: usize,
    max_depth: usize,
) -> String {
    if let Some(fields) = model.object_fields(type_name) {
        return build_fields_recursive(model, fields, depth, max_depth);
    }

    COMMON_TYPE_FIELDS
        .iter()
        .find(|(key, _)| *key == type_name)
        .map(|(_, fields)| (*fields).to_string())
        .unwrap_or_else(|| "id\n    __typename".to_string())
}

fn is_complex_type(type_string: &str) -> bool {
    let clean = clean_type_name(type_string);
    COMPLEX_TYPES.contains(&clean.as_str())
}

/// Generic default selection: `id` plus a type discriminator, widened by
/// keyword matches on the type name.
fn default_fields(type_name: Option<&str>) -> String {
    let mut fields = vec!["id".to_string(), "__typename".to_string()];
    let lower = type_name.unwrap_or_default().to_lowercase();

    if lower.contains("product") {
        fields.extend([
            "name".to_string(),
            "sku".to_string(),
            "price { regularPrice { amount { value currency } } }".to_string(),
        ]);
    } else if lower.contains("category") {
        fields.extend(["name".to_string(), "url_key".to_string(), "description".to_string()]);
    } else if lower.contains("customer") {
        fields.extend(["firstname".to_string(), "lastname".to_string(), "email".to_string()]);
    } else if lower.contains("cart") {
        fields.extend([
            "total_quantity".to_string(),
            "prices { grand_total { value currency } }".to_string(),
        ]);
    }

    fields.join("\n    ")
}

fn fragment_for_query(model: &SchemaModel, name: &str, return_type: Option<&str>) -> Option<String> {
    if let Some(return_type) = return_type {
        let clean = clean_type_name(return_type);
        if COMPLEX_TYPES.contains(&clean.as_str()) {
            return fragment_for_type(model, &clean);
        }
    }

    let lower = name.to_lowercase();
    if let Some((_, fragment_type)) = QUERY_FRAGMENT_TYPES.iter().find(|(key, _)| *key == lower) {
        return fragment_for_type(model, fragment_type);
    }
    None
}

fn fragment_for_mutation(name: &str) -> Option<String> {
    if let Some((_, fragment)) = MUTATION_FRAGMENTS.iter().find(|(key, _)| *key == name) {
        return Some((*fragment).to_string());
    }
    default_fragment(name)
}

/// Named fragment for a type, expanded shallowly for readability
fn fragment_for_type(model: &SchemaModel, type_name: &str) -> Option<String> {
    if let Some(fields) = model.object_fields(type_name) {
        let body = build_fields_recursive(model, fields, FRAGMENT_DEPTH, FRAGMENT_DEPTH);
        if !body.is_empty() {
            return Some(format!(
                "fragment {}Fragment on {} {{\n{}\n}}",
                type_name, type_name, body
            ));
        }
    }
    default_fragment(type_name)
}

fn default_fragment(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    if lower.contains("cart") {
        Some("fragment CartFragment on Cart {\n  id\n  items {\n    id\n    product {\n      name\n      sku\n    }\n    quantity\n  }\n  total_quantity\n}".to_string())
    } else if lower.contains("customer") {
        Some("fragment CustomerFragment on Customer {\n  id\n  firstname\n  lastname\n  email\n}".to_string())
    } else if lower.contains("product") {
        Some("fragment ProductFragment on ProductInterface {\n  id\n  name\n  sku\n  price {\n    regularPrice {\n      amount {\n        value\n        currency\n      }\n    }\n  }\n}".to_string())
    } else {
        None
    }
}

/// Example variables document for the declared arguments
fn variables_example(args: &IndexMap<String, ArgumentDescriptor>) -> Option<JsonValue> {
    if args.is_empty() {
        return None;
    }
    let mut variables = serde_json::Map::new();
    for (arg_name, arg) in args {
        variables.insert(arg_name.clone(), example_value(arg_name, &arg.ty));
    }
    Some(JsonValue::Object(variables))
}

/// Example value for one argument, by name override then type heuristics
fn example_value(arg_name: &str, type_string: &str) -> JsonValue {
    match arg_name {
        // placeholder: the input/filter/sort shape is the type itself
        "input" | "filter" | "sort" => return json!(type_string),
        "cartItems" => return json!([{"data": {"quantity": 1, "sku": "simple-product-sku"}}]),
        "productId" | "quantity" => return json!(1),
        "pageSize" => return json!(20),
        "currentPage" => return json!(1),
        _ => {}
    }
    if let Some((_, example)) = VARIABLE_EXAMPLES.iter().find(|(key, _)| *key == arg_name) {
        return json!(example);
    }

    let is_list = type_string.contains('[');
    if is_list && type_string.contains("String") {
        json!(["item1", "item2"])
    } else if is_list && type_string.contains("Int") {
        json!([987, 123])
    } else if type_string.contains("String") || type_string.contains("ID") {
        json!("example_value")
    } else if type_string.contains("Int") {
        json!(123)
    } else if type_string.contains("Float") {
        json!(123.45)
    } else if type_string.contains("Boolean") {
        json!(true)
    } else if is_list {
        json!(["item1", "item2"])
    } else {
        json!(type_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::introspection::IntrospectionDocument;
    use serde_json::json;

    fn model_with_cycle() -> SchemaModel {
        let doc: IntrospectionDocument = serde_json::from_value(json!({
            "types": [
                {
                    "kind": "OBJECT",
                    "name": "Query",
                    "fields": [
                        {
                            "name": "category",
                            "type": {"kind": "OBJECT", "name": "Category"},
                            "args": [
                                {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}}
                            ]
                        }
                    ]
                },
                {
                    "kind": "OBJECT",
                    "name": "Mutation",
                    "fields": [
                        {
                            "name": "createCustomer",
                            "type": {"kind": "OBJECT", "name": "CustomerOutput"},
                            "args": [
                                {"name": "input", "type": {"kind": "NON_NULL", "ofType": {"kind": "INPUT_OBJECT", "name": "CustomerCreateInput"}}}
                            ]
                        }
                    ]
                },
                {
                    "kind": "OBJECT",
                    "name": "Category",
                    "fields": [
                        {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}},
                        {"name": "name", "type": {"kind": "SCALAR", "name": "String"}},
                        {"name": "children", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "Category"}}}
                    ]
                },
                {
                    "kind": "OBJECT",
                    "name": "CustomerOutput",
                    "fields": [
                        {"name": "customer", "type": {"kind": "OBJECT", "name": "Customer"}}
                    ]
                },
                {
                    "kind": "OBJECT",
                    "name": "Customer",
                    "fields": [
                        {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}},
                        {"name": "email", "type": {"kind": "SCALAR", "name": "String"}}
                    ]
                },
                {
                    "kind": "INPUT_OBJECT",
                    "name": "CustomerCreateInput",
                    "inputFields": [
                        {"name": "email", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "String"}}}
                    ]
                }
            ]
        }))
        .unwrap();
        SchemaModel::from_introspection(&doc)
    }

    fn max_brace_depth(text: &str) -> usize {
        let mut depth = 0usize;
        let mut max = 0usize;
        for c in text.chars() {
            match c {
                '{' => {
                    depth += 1;
                    max = max.max(depth);
                }
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        max
    }

    #[test]
    fn test_create_customer_mutation_shape() {
        let model = model_with_cycle();
        let args = model.mutations["createCustomer"].args.clone();
        let sample =
            build_sample_operation(&model, "createCustomer", OperationKind::Mutation, &args, DEFAULT_MAX_DEPTH);

        assert!(sample.query_text.contains("mutation CreatecustomerMutation"));
        assert!(sample.query_text.contains("$input: CustomerCreateInput!"));
        assert!(sample.query_text.contains("createCustomer(input: $input)"));
        // well-known mutation gets its hand-written fragment
        assert!(sample.query_text.contains("fragment CustomerOutputFragment"));
    }

    #[test]
    fn test_cyclic_type_terminates_within_depth_limit() {
        let model = model_with_cycle();
        let args = model.queries["category"].args.clone();
        let sample =
            build_sample_operation(&model, "category", OperationKind::Query, &args, DEFAULT_MAX_DEPTH);

        // operation + root field add two levels around the selection sets
        assert!(max_brace_depth(&sample.query_text) <= DEFAULT_MAX_DEPTH + 2);
        assert_eq!(
            sample.query_text.matches('{').count(),
            sample.query_text.matches('}').count()
        );
    }

    #[test]
    fn test_no_arguments_means_no_variable_block() {
        let model = model_with_cycle();
        let sample = build_sample_operation(
            &model,
            "storeConfig",
            OperationKind::Query,
            &IndexMap::new(),
            DEFAULT_MAX_DEPTH,
        );
        assert!(sample.variables.is_none());
        assert!(sample.query_text.starts_with("query StoreconfigQuery {"));
        assert!(!sample.query_text.contains('$'));
    }

    #[test]
    fn test_unresolvable_return_type_uses_template() {
        let model = model_with_cycle();
        let sample = build_sample_operation(
            &model,
            "products",
            OperationKind::Query,
            &IndexMap::new(),
            DEFAULT_MAX_DEPTH,
        );
        assert!(sample.query_text.contains("total_count"));
        assert!(sample.query_text.contains("page_info"));
    }

    #[test]
    fn test_default_fields_by_type_keyword() {
        assert!(default_fields(Some("ProductSearchResult")).contains("sku"));
        assert!(default_fields(Some("CartOutput")).contains("total_quantity"));
        let generic = default_fields(None);
        assert!(generic.contains("id"));
        assert!(generic.contains("__typename"));
    }

    #[test]
    fn test_example_values() {
        assert_eq!(example_value("cartId", "String!"), json!("your_cart_id"));
        assert_eq!(example_value("pageSize", "Int"), json!(20));
        assert_eq!(example_value("ids", "[Int]"), json!([987, 123]));
        assert_eq!(example_value("names", "[String]"), json!(["item1", "item2"]));
        assert_eq!(example_value("token", "String"), json!("example_value"));
        assert_eq!(example_value("active", "Boolean"), json!(true));
        assert_eq!(
            example_value("input", "CustomerCreateInput!"),
            json!("CustomerCreateInput!")
        );
    }

    #[test]
    fn test_variables_example_for_create_customer() {
        let model = model_with_cycle();
        let args = model.mutations["createCustomer"].args.clone();
        let sample =
            build_sample_operation(&model, "createCustomer", OperationKind::Mutation, &args, DEFAULT_MAX_DEPTH);
        let variables = sample.variables.unwrap();
        assert_eq!(variables["input"], json!("CustomerCreateInput!"));
    }

    #[test]
    fn test_fragment_appended_for_complex_return_type() {
        let model = model_with_cycle();
        let args = IndexMap::new();
        // Customer is in the complex set and resolvable from the model
        let sample = build_sample_operation(&model, "customer", OperationKind::Query, &args, DEFAULT_MAX_DEPTH);
        // return type unresolvable (no such query) -> falls back to query fragment map
        assert!(sample.query_text.contains("fragment CustomerFragment on Customer"));
    }
}
