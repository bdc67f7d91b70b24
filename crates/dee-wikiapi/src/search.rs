use serde_json::Value;

use crate::error::Fault;

/// Interprets an opensearch payload `[term, [titles..], [descriptions..], [urls..]]`.
///
/// Only the title list is used; its order is kept.
pub fn interpret(value: &Value, debug: bool) -> Result<Vec<String>, Fault> {
    if debug {
        eprintln!("debug: interpreting search response");
    }

    let titles = value
        .as_array()
        .and_then(|arr| arr.get(1))
        .and_then(Value::as_array)
        .ok_or(Fault::Shape("search response without a title list"))?;

    titles
        .iter()
        .map(|title| {
            title
                .as_str()
                .map(str::to_owned)
                .ok_or(Fault::Shape("non-string entry in search titles"))
        })
        .collect()
}
