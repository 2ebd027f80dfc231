use anyhow::Context;
use synth_config::SynthConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env` support) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SynthConfig> {
    let mut config = SynthConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(data_dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(data_dir);
    }
    Ok(config)
}
