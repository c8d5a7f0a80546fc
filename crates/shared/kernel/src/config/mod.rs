use config::{Config, Environment, File};
use dh_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[dh_derive::dh_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration into `T`.
///
/// 1. **Base file**: `path`, or `server` in the working directory. The extension is
///    detected by the `config` crate (`server.toml`, `server.json`, ...).
/// 2. **Environment**: variables prefixed with `DH__`, nested with double underscores
///    (`DH__SERVER__PORT=8080` sets `server.port`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the base file is missing, a source cannot be read,
/// or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use dh_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load_with_env<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", path.display());

    let config = Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dh_domain::config::ApiConfig;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        env_source().source(Some(map))
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("server.toml");
        fs::write(&file, "[server]\nport = 8080\n\n[logging]\nlevel = \"debug\"\n")
            .expect("write config");

        let cfg: ApiConfig = load_with_env(Some(&file), env(&[])).expect("load");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn extension_is_detected_from_stem() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("server.toml"), "[server]\nport = 7000\n").expect("write");

        let cfg: ApiConfig = load_with_env(Some(dir.path().join("server")), env(&[])).expect("load");
        assert_eq!(cfg.server.port, 7000);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempdir().expect("tempdir");
        let file = dir.path().join("server.toml");
        fs::write(&file, "[server]\nport = 8080\n").expect("write config");

        let cfg: ApiConfig = load_with_env(
            Some(&file),
            env(&[("DH__SERVER__PORT", "9090"), ("DH__LOGGING__JSON", "true")]),
        )
        .expect("load");
        assert_eq!(cfg.server.port, 9090);
        assert!(cfg.logging.json);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let res: Result<ApiConfig, _> = load_with_env(Some(dir.path().join("absent")), env(&[]));

        let err = res.expect_err("missing base file must fail");
        assert!(err.to_string().contains("Failed to build config"));
    }
}
