//! Todo API Demo
//!
//! Demonstrates grapnel's descriptor-based HTTP client pattern against
//! the public jsonplaceholder API.

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use grapnel::prelude::*;

// ============================================================================
// Data Types
// ============================================================================

/// A todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Request to create a todo item.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

// ============================================================================
// Declarative client descriptor
// ============================================================================

/// Build the todo client descriptor against a base URL.
fn todo_descriptor(domain: &str) -> Arc<ClientDescriptor> {
    Arc::new(
        ClientDescriptor::new("todos", domain)
            .endpoint("get", "GET", "/todos/{id}")
            .endpoint("list", "GET", "/todos")
            .endpoint("create", "POST", "/todos")
            .endpoint("delete", "DELETE", "/todos/{id}"),
    )
}

// ============================================================================
// Main: Demonstrate usage
// ============================================================================

#[tokio::main]
async fn main() -> grapnel::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut registry = Registry::new();
    registry.register(todo_descriptor("https://jsonplaceholder.typicode.com"));

    let dispatcher = Dispatcher::wire(registry, HyperClient::new())?;

    // Fetch a single todo by path variable
    let endpoint = dispatcher.endpoint("todos", "get").expect("wired");
    let Json(todo): Json<Todo> = endpoint
        .invoke([PathVars::new().set("id", "1").into()])
        .await?;
    println!("Fetched: {todo:?}");

    // List todos filtered by query parameter
    let endpoint = dispatcher.endpoint("todos", "list").expect("wired");
    let Json(todos): Json<Vec<Todo>> = endpoint
        .invoke([Query::new().add("userId", "1").into()])
        .await?;
    println!("User 1 has {} todos", todos.len());

    // Create a todo and read back both status and decoded body
    let endpoint = dispatcher.endpoint("todos", "create").expect("wired");
    let (status, Json(created)): (Status, Json<Todo>) = endpoint
        .invoke([
            JsonBody::new(CreateTodo {
                user_id: 1,
                title: "write more demos".to_string(),
                completed: false,
            })
            .into(),
            Headers::new().set("X-Demo", "grapnel").into(),
        ])
        .await?;
    println!("Created ({status}): {created:?}");

    // Delete, only caring about the status line
    let endpoint = dispatcher.endpoint("todos", "delete").expect("wired");
    let status: Status = endpoint
        .invoke([
            PathVars::new().set("id", "1").into(),
            CallContext::new()
                .with_deadline(std::time::Duration::from_secs(10))
                .into(),
        ])
        .await?;
    println!("Deleted ({status})");

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================
