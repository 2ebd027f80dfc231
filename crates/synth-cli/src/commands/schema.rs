use serde_json::json;
use synth_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `synth schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match args.name.as_deref() {
        None => output(&json!({ "schemas": registry.list() }), flags.format),
        Some(name) => {
            let schema = registry.get(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown schema '{name}'. Available: {}",
                    registry.list().join(", ")
                )
            })?;
            output(schema, flags.format)
        }
    }
}
