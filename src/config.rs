use crate::{
    backend::{ApiClient, Backend, DemoBackend},
    locale::Locale,
};
use anyhow::Context;
use config::{Config, File};
use reqwest::Url;
use secrecy::SecretString;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::{env, time::Duration};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub hmac_secret: SecretString,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the product API. The built-in demo backend is used when unset.
    pub base_url: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn backend(&self) -> anyhow::Result<Backend> {
        match self.base_url.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let url = Url::parse(raw)
                    .with_context(|| format!("{raw} is not a valid backend base url."))?;
                let client =
                    ApiClient::new(url, self.timeout()).context("Failed to build the api client.")?;
                Ok(Backend::Remote(client))
            }
            _ => Ok(Backend::Demo(DemoBackend::default())),
        }
    }
}

pub fn get() -> anyhow::Result<Settings> {
    let config_path = env::current_dir()
        .context("Failed to determine the current directory.")?
        .join("config");

    let app_env: Environment = env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let env_file = {
        let mut chars = app_env.as_str().chars();
        let mut env_file = chars
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        env_file.push_str(&chars.collect::<String>());

        format!("{}.toml", env_file)
    };

    let settings = Config::builder()
        .add_source(File::from(config_path.join("Base.toml")))
        .add_source(File::from(config_path.join(env_file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .context("Failed to assemble the configuration sources.")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize the configuration.")
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl TryFrom<&str> for Environment {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `local` or `production`.",
            )),
        }
    }
}
