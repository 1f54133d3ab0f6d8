use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub draft: DraftConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    /// Template text used when the host has no saved draft
    #[serde(default = "default_template")]
    pub template: String,
    /// Group to send to; when unset the first directory group is used
    #[serde(default)]
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// JSON fixture with contact groups; built-in sample data when unset
    #[serde(default)]
    pub contacts_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    /// Composer implementation to wire up ("console" is the only built-in)
    #[serde(default = "default_composer_kind")]
    pub kind: String,
    /// Artificial per-message delay in milliseconds
    #[serde(default)]
    pub delay_ms: u64,
}

fn default_template() -> String {
    "Hey $name how is it going?".to_string()
}

fn default_composer_kind() -> String {
    "console".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("draft.template", default_template())?
            .set_default("composer.kind", "console")?
            .set_default("composer.delay_ms", 0)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // DRAFT_TEMPLATE, COMPOSER_KIND, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            group_id: None,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            contacts_file: None,
        }
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            kind: default_composer_kind(),
            delay_ms: 0,
        }
    }
}
