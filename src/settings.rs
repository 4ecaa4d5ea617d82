use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr};
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

/// Credentials for the document-database backend. Injected, never compiled
/// into source.
#[derive(Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct AppwriteConfig {
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub database_id: String,
}

impl AppwriteConfig {
    /// True when every field required to reach the document API is present.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
            && !self.project_id.trim().is_empty()
            && !self.api_key.trim().is_empty()
            && !self.database_id.trim().is_empty()
    }

    fn is_empty(&self) -> bool {
        self.endpoint.trim().is_empty()
            && self.project_id.trim().is_empty()
            && self.api_key.trim().is_empty()
            && self.database_id.trim().is_empty()
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_functions_base_url")]
    pub functions_base_url: String,

    #[serde(default)]
    pub appwrite: AppwriteConfig,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Dashboard".to_string()
}
fn default_functions_base_url() -> String {
    "https://api.therama.dev/functions/v1".to_string()
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!("config/{}", env_name.to_string().to_lowercase()))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.functions_base_url.trim().is_empty() {
            errors.push("FUNCTIONS_BASE_URL cannot be empty".to_string());
        } else if Url::parse(&self.functions_base_url).is_err() {
            errors.push(format!(
                "FUNCTIONS_BASE_URL is not a valid URL: {}",
                self.functions_base_url
            ));
        }

        // Appwrite is optional, but a half-filled credential block is a
        // deployment mistake, not a choice.
        if !self.appwrite.is_empty() && !self.appwrite.is_configured() {
            errors.push(
                "APPWRITE settings are partially set; endpoint, project_id, api_key and database_id must all be provided".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppwriteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppwriteConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.redact())
            .field("database_id", &self.database_id)
            .finish()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("functions_base_url", &self.functions_base_url)
            .field("appwrite", &self.appwrite)
            .finish()
    }
}
