use crate::{commands::ConnectionArgs, env::EnvManager, error::CliError};
use connectors::proceset::{ClientConfig, Connector};
use std::time::Duration;
use tracing::{error, info};

pub const BASE_URL_VAR: &str = "PROCESET_BASE_URL";
pub const API_KEY_VAR: &str = "PROCESET_API_KEY";
pub const TIMEOUT_VAR: &str = "PROCESET_TIMEOUT_SECS";

/// Where and how to reach the platform, after merging flags and environment.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl ConnectionSettings {
    /// Flags take precedence over environment variables.
    pub fn resolve(args: &ConnectionArgs, env: &EnvManager) -> Result<Self, CliError> {
        let base_url = args
            .base_url
            .clone()
            .or_else(|| env.get(BASE_URL_VAR).map(str::to_string))
            .ok_or_else(|| {
                CliError::Config(format!("missing base URL: pass --base-url or set {BASE_URL_VAR}"))
            })?;

        let api_key = args
            .api_key
            .clone()
            .or_else(|| env.get(API_KEY_VAR).map(str::to_string))
            .ok_or_else(|| {
                CliError::Config(format!("missing API key: pass --api-key or set {API_KEY_VAR}"))
            })?;

        let timeout_secs = match args.timeout_secs {
            Some(secs) => Some(secs),
            None => env
                .get(TIMEOUT_VAR)
                .map(|raw| {
                    raw.trim().parse::<u64>().map_err(|_| {
                        CliError::Config(format!(
                            "{TIMEOUT_VAR} must be whole seconds, got '{raw}'"
                        ))
                    })
                })
                .transpose()?,
        };

        Ok(ConnectionSettings {
            base_url,
            api_key,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        match self.timeout {
            Some(timeout) => ClientConfig::default().with_timeout(timeout),
            None => ClientConfig::default(),
        }
    }
}

pub async fn connect(settings: &ConnectionSettings) -> Result<Connector, CliError> {
    info!("Connecting to Proceset at '{}'", settings.base_url);
    let connector = Connector::with_config(
        &settings.base_url,
        &settings.api_key,
        settings.client_config(),
    )
    .await
    .map_err(|e| {
        error!("Connection to '{}' failed: {}", settings.base_url, e);
        CliError::Connector(e)
    })?;
    Ok(connector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::proceset::config::DEFAULT_TIMEOUT;

    fn env_with(content: &str) -> EnvManager {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, content).unwrap();

        let mut env = EnvManager::default();
        env.load_from_file(&path).unwrap();
        env
    }

    #[test]
    fn test_resolve_from_env() {
        let env = env_with(
            "PROCESET_BASE_URL=https://proceset.example.com/\n\
             PROCESET_API_KEY=abc\n\
             PROCESET_TIMEOUT_SECS=15\n",
        );

        let settings = ConnectionSettings::resolve(&ConnectionArgs::default(), &env).unwrap();
        assert_eq!(settings.base_url, "https://proceset.example.com/");
        assert_eq!(settings.api_key, "abc");
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.client_config().timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_with("PROCESET_BASE_URL=https://env.example.com/\nPROCESET_API_KEY=env\n");
        let args = ConnectionArgs {
            base_url: Some("https://flag.example.com/".to_string()),
            api_key: Some("flag".to_string()),
            ..Default::default()
        };

        let settings = ConnectionSettings::resolve(&args, &env).unwrap();
        assert_eq!(settings.base_url, "https://flag.example.com/");
        assert_eq!(settings.api_key, "flag");
        assert_eq!(settings.timeout, None);
        assert_eq!(settings.client_config().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let env = env_with("PROCESET_BASE_URL=https://env.example.com/\n");
        let err = ConnectionSettings::resolve(&ConnectionArgs::default(), &env).unwrap_err();
        assert!(matches!(err, CliError::Config(ref msg) if msg.contains(API_KEY_VAR)));
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let env = env_with(
            "PROCESET_BASE_URL=https://env.example.com/\n\
             PROCESET_API_KEY=abc\n\
             PROCESET_TIMEOUT_SECS=soon\n",
        );
        let err = ConnectionSettings::resolve(&ConnectionArgs::default(), &env).unwrap_err();
        assert!(matches!(err, CliError::Config(ref msg) if msg.contains("soon")));
    }
}
