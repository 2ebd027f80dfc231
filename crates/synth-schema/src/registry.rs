//! Central schema registry for all Idea Synthesizer types.
//!
//! The `SchemaRegistry` builds JSON Schemas from synth-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde::de::DeserializeOwned;

use crate::error::SchemaError;

/// Registry name of the upstream generation payload.
pub const IDEA_BATCH: &str = "idea_batch";

/// Central store of all JSON Schemas in the system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the entity, collection, and upstream
    /// payload schemas from synth-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (6) ---
        register!(schemas, "research_idea", synth_core::entities::ResearchIdea);
        register!(schemas, "idea_draft", synth_core::entities::IdeaDraft);
        register!(schemas, "bookmark", synth_core::entities::Bookmark);
        register!(schemas, "resource", synth_core::entities::Resource);
        register!(schemas, "user_profile", synth_core::entities::UserProfile);
        register!(schemas, "framework", synth_core::entities::Framework);

        // --- Persisted collections (2) ---
        register!(
            schemas,
            "bookmark_list",
            Vec<synth_core::entities::Bookmark>
        );
        register!(
            schemas,
            "framework_list",
            Vec<synth_core::entities::Framework>
        );

        // --- Upstream payload (1) ---
        register!(schemas, IDEA_BATCH, synth_core::entities::IdeaBatch);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate `instance` against a named schema, then decode it.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::validate`], or `SchemaError::Decode` if the
    /// validated value still fails to deserialize into `T`.
    pub fn validate_as<T: DeserializeOwned>(
        &self,
        name: &str,
        instance: serde_json::Value,
    ) -> Result<T, SchemaError> {
        self.validate(name, &instance)?;
        serde_json::from_value(instance).map_err(|e| SchemaError::Decode(e.to_string()))
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
