//! Todo list kept in a persisted store

use serde_json::json;
use storem::{Data, FileBackend, Key, Store, Value};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storem=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    println!("=== Todo Store ===\n");

    let dir = std::env::temp_dir().join("storem-todo-demo");
    let mut store = Store::builder()
        .persist(true)
        .debug(true)
        .backend(FileBackend::new(&dir))
        .build()?;

    println!("Loaded {} entries from {}", store.len(), dir.display());

    store.listen("todos", |new: Option<&Value>, _: Option<&Value>| {
        let open = new
            .and_then(Value::as_array)
            .map(|todos| todos.iter().filter(|t| t["completed"] == false).count())
            .unwrap_or(0);
        println!("Todos updated! Active todos: {open}");
    });

    // Add a todo
    println!("Adding todo...");
    store.set([
        ("todos", json!([{ "id": 1, "text": "Learn storem", "completed": false }])),
        ("filter", json!("all")),
    ])?;

    // Complete every todo without firing effects, then persist explicitly
    store.set_mutation("complete_all", |data: &mut Data, _: &[Value]| {
        if let Some(Value::Array(todos)) = data.get_mut(&Key::from("todos")) {
            for todo in todos {
                todo["completed"] = json!(true);
            }
        }
    });
    println!("\nCompleting todos...");
    store.run_mutation("complete_all", &[])?;
    store.save()?;

    println!("\nFinal state: {:#?}", store.all());
    Ok(())
}
