use figment::Jail;
use synth_config::SynthConfig;
use synth_core::enums::Creativity;

#[test]
fn prefixed_env_fills_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SYNTH_GEMINI__API_KEY", "AIza-from-env");
        jail.set_env("SYNTH_GENERAL__DEFAULT_CREATIVITY", "conservative");

        let config = SynthConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-from-env");
        assert_eq!(config.general.default_creativity, Creativity::Conservative);
        Ok(())
    });
}

#[test]
fn bare_provider_key_is_accepted() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "AIza-bare");

        let config = SynthConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-bare");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_bare_provider_key() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "AIza-bare");
        jail.set_env("SYNTH_GEMINI__API_KEY", "AIza-prefixed");

        let config = SynthConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-prefixed");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".synth")?;
        jail.create_file(
            ".synth/config.toml",
            r#"
[gemini]
model = "from-toml"
"#,
        )?;
        jail.set_env("SYNTH_GEMINI__MODEL", "from-env");

        let config = SynthConfig::load().expect("config loads");
        assert_eq!(config.gemini.model, "from-env");
        Ok(())
    });
}
