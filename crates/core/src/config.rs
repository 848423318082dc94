use crate::months::Language;
use serde::Deserialize;

/// Root application configuration. Loaded from environment variables with the
/// prefix `MEDIA_PLANNER__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Display language; controls month-name lists for month-keys.
    #[serde(default)]
    pub language: Language,
    /// Total investment pre-filled into newly created blank plans.
    #[serde(default = "default_total_investment")]
    pub default_total_investment: f64,
    /// Emit logs as JSON instead of human-readable lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_total_investment() -> f64 {
    10_000.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_total_investment: default_total_investment(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("MEDIA_PLANNER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
