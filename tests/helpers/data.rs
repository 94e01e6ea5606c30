use helium_exec::types::{DataType, Schema, Value};

#[allow(dead_code)]
pub fn users_schema() -> Schema {
    Schema::from_pairs([
        ("id", DataType::Int64),
        ("name", DataType::Varchar { max_len: None }),
        ("age", DataType::Int32),
        ("active", DataType::Boolean),
    ])
}

#[allow(dead_code)]
pub fn users() -> Vec<Vec<Value>> {
    vec![
        user(1, "Alice", 30, true),
        user(2, "Bob", 15, false),
        user(3, "Carol", 40, true),
    ]
}

#[allow(dead_code)]
pub fn orders_schema() -> Schema {
    Schema::from_pairs([
        ("id", DataType::Int64),
        ("user_id", DataType::Int64),
        ("amount", DataType::Int64),
    ])
}

#[allow(dead_code)]
pub fn orders() -> Vec<Vec<Value>> {
    vec![
        vec![Value::Int64(1), Value::Int64(1), Value::Int64(200)],
        vec![Value::Int64(2), Value::Int64(1), Value::Int64(20)],
    ]
}

#[allow(dead_code)]
pub fn ints(n: i64) -> Vec<Vec<Value>> {
    (0..n).map(|i| vec![Value::Int64(i)]).collect()
}

fn user(id: i64, name: &str, age: i32, active: bool) -> Vec<Value> {
    vec![
        Value::Int64(id),
        Value::from(name),
        Value::Int32(age),
        Value::Boolean(active),
    ]
}
