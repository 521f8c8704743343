//! Naming-convention description heuristics
//!
//! When the schema carries no description for a field or argument, a
//! best-effort one is derived from its name: a fixed dictionary of
//! well-known operation and argument names, then a generative fallback that
//! tokenizes camelCase identifiers and maps known verb tokens.
//!
//! The dictionaries are tuned to an e-commerce schema vocabulary; swap the
//! tables to retarget the heuristics. Nothing here ever fails, and nothing
//! here participates in type resolution.

/// Well-known operation names with hand-written descriptions
const FIELD_DESCRIPTIONS: &[(&str, &str)] = &[
    ("adminChangeEnableCategory", "Enable or disable a category (Admin functionality)"),
    ("changeEnableCategory", "Enable or disable a category"),
    ("updateCategory", "Update category information"),
    ("createCategory", "Create a new category"),
    ("deleteCategory", "Delete a category"),
    ("adminUpdateProduct", "Update product (Admin functionality)"),
    ("createCustomer", "Create a new customer account"),
    ("updateCustomer", "Update customer information"),
    ("deleteCustomer", "Delete customer account"),
    ("createCart", "Create a new shopping cart"),
    ("updateCart", "Update shopping cart items"),
    ("placeOrder", "Place an order"),
    ("applyCoupon", "Apply coupon code to cart"),
    ("removeCoupon", "Remove coupon from cart"),
];

/// Common argument names with hand-written descriptions
const ARGUMENT_DESCRIPTIONS: &[(&str, &str)] = &[
    ("input", "Input data for the operation"),
    ("id", "Unique identifier"),
    ("sku", "Product SKU"),
    ("email", "Email address"),
    ("filter", "Filter criteria"),
    ("sort", "Sort order"),
    ("pageSize", "Number of items per page"),
    ("currentPage", "Current page number"),
    ("search", "Search term"),
    ("categoryId", "Category ID"),
    ("productId", "Product ID"),
    ("customerId", "Customer ID"),
    ("cartId", "Shopping cart ID"),
    ("orderId", "Order ID"),
];

/// Domain keywords and the suffix clause they contribute; first match wins
const DOMAIN_SUFFIXES: &[(&str, &str)] = &[
    ("category", " for categories"),
    ("product", " for products"),
    ("customer", " for customers"),
    ("cart", " for shopping cart"),
    ("order", " for orders"),
];

/// Describe a field or operation by name
pub fn describe_field(name: &str) -> String {
    FIELD_DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, description)| (*description).to_string())
        .unwrap_or_else(|| generate_from_name(name))
}

/// Describe an argument by name
pub fn describe_argument(name: &str) -> String {
    ARGUMENT_DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, description)| (*description).to_string())
        .unwrap_or_else(|| capitalize(&name.replace('_', " ")))
}

/// Generative fallback: tokenize the camelCase identifier, map known verb
/// tokens, join with spaces and append a domain suffix clause.
fn generate_from_name(name: &str) -> String {
    let words: Vec<String> = split_camel_case(name)
        .iter()
        .map(|word| {
            let lower = word.to_lowercase();
            match lower.as_str() {
                "admin" => "(Admin)".to_string(),
                "change" | "update" => "Update".to_string(),
                "create" => "Create".to_string(),
                "delete" => "Delete".to_string(),
                "enable" | "disable" => lower,
                _ => capitalize(&lower),
            }
        })
        .collect();

    let mut description = words.join(" ");
    let lower_name = name.to_lowercase();
    if let Some((_, suffix)) = DOMAIN_SUFFIXES
        .iter()
        .find(|(keyword, _)| lower_name.contains(keyword))
    {
        description.push_str(suffix);
    }
    description
}

/// Split an identifier at uppercase-letter boundaries
fn split_camel_case(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in name.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
