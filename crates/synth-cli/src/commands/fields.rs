use serde::Serialize;
use synth_core::catalog::{ACADEMIC_FIELDS, search_fields};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FieldsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FieldsResponse {
    fields: Vec<&'static str>,
}

/// Handle `synth fields`.
pub fn handle(args: &FieldsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fields = match args.search.as_deref() {
        Some(term) => search_fields(term),
        None => ACADEMIC_FIELDS.to_vec(),
    };
    output(&FieldsResponse { fields }, flags.format)
}
