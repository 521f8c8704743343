//! Shared helpers for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A small but representative introspection response: one query, one
/// mutation, an object type, an input type, an enum and a custom scalar.
pub fn sample_introspection() -> Value {
    json!({
        "data": {
            "__schema": {
                "queryType": {"name": "Query"},
                "mutationType": {"name": "Mutation"},
                "types": [
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "fields": [
                            {
                                "name": "cart",
                                "description": "Shopping cart contents",
                                "type": {"kind": "OBJECT", "name": "Cart"},
                                "args": [
                                    {
                                        "name": "cartId",
                                        "type": {
                                            "kind": "NON_NULL",
                                            "ofType": {"kind": "SCALAR", "name": "String"}
                                        }
                                    }
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
                                    {
                                        "name": "input",
                                        "type": {
                                            "kind": "NON_NULL",
                                            "ofType": {"kind": "INPUT_OBJECT", "name": "CustomerCreateInput"}
                                        }
                                    }
                                ]
                            }
                        ]
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Cart",
                        "fields": [
                            {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}},
                            {"name": "total_quantity", "type": {"kind": "SCALAR", "name": "Int"}}
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
                            {"name": "email", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "String"}}},
                            {"name": "firstname", "type": {"kind": "SCALAR", "name": "String"}}
                        ]
                    },
                    {
                        "kind": "ENUM",
                        "name": "SortEnum",
                        "enumValues": [
                            {"name": "ASC", "description": "Ascending"},
                            {"name": "DESC", "description": "Descending"}
                        ]
                    },
                    {"kind": "SCALAR", "name": "Money", "description": "A monetary value"}
                ]
            }
        }
    })
}

/// Mount a POST /graphql mock answering every request with `body`
pub async fn mount_graphql(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a POST /graphql mock answering with a fixed HTTP status and body
pub async fn mount_graphql_raw(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Endpoint URL for a mock server
pub fn endpoint(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}
