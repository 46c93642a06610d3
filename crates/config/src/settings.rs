//! Top-level settings loader

use serde::{Deserialize, Serialize};

use crate::backends::{
    CompletionSettings, EmbeddingSettings, RerankerSettings, SupabaseSettings,
};
use crate::retrieval::RetrievalSettings;
use crate::sql::SqlSettings;
use crate::ConfigError;

/// All settings for the retrieval core, one section per concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub retrieval: RetrievalSettings,

    #[serde(default)]
    pub sql: SqlSettings,

    #[serde(default)]
    pub completion: CompletionSettings,

    #[serde(default)]
    pub embedding: EmbeddingSettings,

    #[serde(default)]
    pub reranker: RerankerSettings,

    #[serde(default)]
    pub supabase: SupabaseSettings,
}

/// Load settings from an optional file plus environment overrides.
///
/// Environment variables use the `SHOP_AGENT_` prefix with `__` separating
/// sections, e.g. `SHOP_AGENT_RETRIEVAL__SCORE_THRESHOLD=0.55`.
pub fn load_settings(path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::with_name(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("SHOP_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;

    if !(0.0..=1.0).contains(&settings.retrieval.score_threshold) {
        return Err(ConfigError::InvalidValue {
            field: "retrieval.score_threshold".to_string(),
            message: "must be within [0, 1]".to_string(),
        });
    }

    tracing::debug!(
        search_k = settings.retrieval.search_k,
        score_threshold = settings.retrieval.score_threshold,
        rerank_top_k = settings.retrieval.rerank_top_k,
        row_cap = settings.sql.row_cap,
        "settings loaded"
    );

    Ok(settings)
}
