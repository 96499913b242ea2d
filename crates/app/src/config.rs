use shared_types::AppConfig;

/// `config.toml`, baked in at build time so web builds need no file access.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Load the bundled configuration.
///
/// If the file fails to parse, every setting falls back to its default.
pub fn load() -> AppConfig {
    parse_or_default(CONFIG_TOML)
}

fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(?config, "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "config.toml rejected, using defaults");
            AppConfig::default()
        }
    }
}
