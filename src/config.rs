use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub output_json_file: String,
    pub exclude_dirs: Vec<String>,
    pub log_level: String,
}

impl AppConfig {
    /// Layers built-in defaults, `config/default`, `config/{RUN_MODE}`,
    /// `config/local`, an optional extra file and `PHOTO_INDEX_*` variables.
    pub fn new(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("output_json_file", "image_index.json")?
            .set_default("exclude_dirs", vec![".git", "__pycache__", "venv", ".vscode"])?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(
                Environment::with_prefix("PHOTO_INDEX")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("exclude_dirs"),
            )
            .build()?
            .try_deserialize()
    }
}
