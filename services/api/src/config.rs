use crate::domain::types::RootUserConfig;

/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `ECODATUM_PORT`.
    pub port: u16,
    /// Expected name and email of the root user.
    pub root_user: RootUserConfig,
    /// When set, the root user is created at startup if missing.
    /// Env var: `ROOT_USER_PASSWORD`.
    pub root_user_password: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("missing environment variable {0}")]
pub struct MissingVar(pub &'static str);

impl ApiConfig {
    pub fn from_env() -> Result<Self, MissingVar> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MissingVar> {
        let required = |key: &'static str| lookup(key).ok_or(MissingVar(key));
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: lookup("ECODATUM_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            root_user: RootUserConfig::new(
                required("ROOT_USER_NAME")?,
                required("ROOT_USER_EMAIL")?,
            ),
            root_user_password: lookup("ROOT_USER_PASSWORD").filter(|v| !v.is_empty()),
        })
    }
}
