use crate::server::{
    error::{config::ConfigError, AppError},
    model::stats::ChildLookupStrategy,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub bind_address: String,
    pub port: u16,

    /// Apply the bundled migrations on startup. Off for databases whose schema is managed
    /// elsewhere.
    pub database_migrate: bool,
    pub child_lookup: ChildLookupStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let database_migrate = match lookup("DATABASE_MIGRATE") {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "DATABASE_MIGRATE".to_string(),
                reason: "expected true or false".to_string(),
                value,
            })?,
            None => false,
        };

        let child_lookup = match lookup("CHILD_LOOKUP") {
            Some(value) => value
                .parse::<ChildLookupStrategy>()
                .map_err(|reason| ConfigError::InvalidEnvVar {
                    name: "CHILD_LOOKUP".to_string(),
                    value,
                    reason,
                })?,
            None => ChildLookupStrategy::default(),
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            database_migrate,
            child_lookup,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
