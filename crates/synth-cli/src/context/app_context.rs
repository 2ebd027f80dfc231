use anyhow::Context;
use async_trait::async_trait;
use synth_config::SynthConfig;
use synth_core::entities::ResearchIdea;
use synth_gemini::{GeminiClient, GenerationError, GenerationParams, IdeaGenerator};
use synth_lab::{LabDefaults, Laboratory};
use synth_store::{FileStore, Store};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub lab: Laboratory<FileStore>,
    pub config: SynthConfig,
}

impl AppContext {
    /// Open the data directory and load the laboratory from it.
    ///
    /// The generation client is only built when an API key is configured;
    /// commands that never generate still work without one.
    pub fn init(config: SynthConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolve_data_dir();
        let backend = FileStore::open(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;

        let generator: Box<dyn IdeaGenerator> = if config.gemini.is_configured() {
            Box::new(GeminiClient::new(&config.gemini).context("failed to build generation client")?)
        } else {
            Box::new(Unconfigured)
        };

        let mut lab = Laboratory::init(
            Store::new(backend),
            generator,
            LabDefaults::from(&config.general),
        );
        let restored = lab.restore_ideas();
        tracing::debug!(data_dir = %data_dir.display(), restored, "application context ready");

        Ok(Self { lab, config })
    }

    /// Fail unless the session gate is open.
    pub fn require_session(&self) -> anyhow::Result<()> {
        if !self.lab.is_authenticated() {
            anyhow::bail!("not signed in. Run 'synth auth login' first.");
        }
        Ok(())
    }
}

/// Stand-in generator used when no API key is configured.
struct Unconfigured;

#[async_trait]
impl IdeaGenerator for Unconfigured {
    async fn generate(
        &self,
        _params: &GenerationParams,
    ) -> Result<Vec<ResearchIdea>, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> SynthConfig {
        let mut config = SynthConfig::default();
        config.storage.data_dir = dir.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn init_without_key_uses_stand_in_generator() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = AppContext::init(config_in(tmp.path())).expect("context should init");
        assert!(ctx.lab.ideas().is_empty());
        assert!(ctx.require_session().is_err());
    }

    #[test]
    fn session_gate_survives_reinit() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = AppContext::init(config_in(tmp.path())).expect("context should init");
        ctx.lab.sign_in().expect("sign in");

        let ctx = AppContext::init(config_in(tmp.path())).expect("context should reinit");
        assert!(ctx.require_session().is_ok());
    }
}
