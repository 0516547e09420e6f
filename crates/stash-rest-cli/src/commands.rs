use serde_json::Value;

pub mod completions;
pub mod create_tag;
pub mod find_performers;
pub mod find_scenes;
pub mod find_tag;
pub mod request;
pub mod scan;

/// Parse a JSON command line argument.
pub fn parse_json(s: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(s)
}

pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
