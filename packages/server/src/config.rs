use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Key used to sign session cookies.
    pub session_secret: String,
    pub session_ttl_hours: i64,
    /// When both are set, an administrator account is created on startup.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    /// Grant the admin role to an existing account registered under `admin_email`.
    /// Off by default: registration does not prove ownership of an address.
    #[serde(default)]
    pub promote_existing_admin: bool,
}

impl AuthConfig {
    /// Reject settings that would seed an account nobody can log in to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_secret.is_empty() {
            return Err(ConfigError::Message(
                "auth.session_secret must not be empty".into(),
            ));
        }
        match (&self.admin_email, &self.admin_password) {
            (Some(email), _) if email.trim().is_empty() => Err(ConfigError::Message(
                "auth.admin_email must not be empty when set".into(),
            )),
            (_, Some(password)) if password.is_empty() => Err(ConfigError::Message(
                "auth.admin_password must not be empty when set".into(),
            )),
            (Some(_), None) | (None, Some(_)) => Err(ConfigError::Message(
                "auth.admin_email and auth.admin_password must be set together".into(),
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite://park_booking.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("auth.session_ttl_hours", 24 * 7)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PARKS__AUTH__SESSION_SECRET)
            .add_source(Environment::with_prefix("PARKS").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.auth.validate()?;
        Ok(config)
    }
}
