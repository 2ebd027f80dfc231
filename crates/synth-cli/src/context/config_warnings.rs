use synth_config::SynthConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SynthConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SynthConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    let single_underscore = |section: &str| {
        let prefix = format!("SYNTH_{section}_");
        let nested = format!("SYNTH_{section}__");
        env_keys
            .iter()
            .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
    };

    if !config.gemini.is_configured() && single_underscore("GEMINI") {
        warnings.push(
            "Gemini API key is empty while SYNTH_GEMINI_* env vars exist. Use double underscores (example: SYNTH_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if config.storage.data_dir.is_empty() && single_underscore("STORAGE") {
        warnings.push(
            "Storage config appears default while SYNTH_STORAGE_* env vars exist. Use double underscores (example: SYNTH_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    warnings
}
