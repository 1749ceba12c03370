//! Counter application using effects, mutations and delete reactions

use serde_json::json;
use storem::{Data, Key, Store, StoreOptions, Value};

fn main() -> anyhow::Result<()> {
    println!("=== Counter Application ===\n");

    let options: StoreOptions = serde_json::from_str(r#"{"reactOnDelete": true}"#)?;
    let mut store = Store::builder().options(options).build()?;

    println!("1. Watching the counter");
    store.listen("count", |new: Option<&Value>, old: Option<&Value>| {
        let old = old.map_or("none".into(), Value::to_string);
        match new {
            Some(new) => println!("   [count] {old} -> {new}"),
            None => println!("   [count] removed"),
        }
    });
    store.listen("count", |new: Option<&Value>, _: Option<&Value>| -> anyhow::Result<()> {
        if new.and_then(Value::as_i64).is_some_and(|n| n > 100) {
            anyhow::bail!("counter overflow");
        }
        Ok(())
    });

    println!("\n2. Incrementing");
    store.set([("count", 0), ("step", 5)])?;
    store.set_mutation("increment", |data: &mut Data, args: &[Value]| {
        let by = args.first().and_then(Value::as_i64).unwrap_or(1);
        let count = data.get(&Key::from("count")).and_then(Value::as_i64).unwrap_or(0);
        data.insert(Key::from("count"), json!(count + by));
    });

    for _ in 0..3 {
        let step = store.get("step").cloned().unwrap_or(json!(1));
        let next = store.get("count").and_then(Value::as_i64).unwrap_or(0)
            + step.as_i64().unwrap_or(1);
        store.set([("count", next)])?;
    }

    println!("\n3. Silent increment through a mutation");
    store.run_mutation("increment", &[json!(10)])?;
    println!("   count is now {:?}", store.get("count"));

    println!("\n4. Effects can reject a change");
    if let Err(err) = store.set([("count", 1000)]) {
        println!("   rejected: {err}");
    }

    println!("\n5. Resetting");
    store.delete(["count", "step"])?;
    println!("   has count: {}", store.has("count"));

    Ok(())
}
