//! Specs command - prints the function-calling specs

use crate::domain::tool_specs;

pub fn run() -> anyhow::Result<()> {
    let specs = serde_json::to_string_pretty(&tool_specs())?;
    println!("{}", specs);

    Ok(())
}
