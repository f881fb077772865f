//! Operational discovery surface.

use serde_json::json;

/// Service name reported on every discovery surface.
pub const SERVICE_NAME: &str = "pterasim-mcp";

/// Transport clients should assume when none is configured.
pub const DEFAULT_TRANSPORT: &str = "stdio";

/// Machine readable service description.
pub fn description() -> serde_json::Value {
    json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "default_transport": DEFAULT_TRANSPORT,
        "tools": [crate::tool::TOOL_NAME],
    })
}

/// Prints the description to stdout.
pub fn run() -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(&description())?);
    Ok(())
}
