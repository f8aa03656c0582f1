use std::env;

use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = database_url(
            env::var("DATABASE_URL").ok(),
            env::var("DB_USER").ok(),
            env::var("DB_PASS").ok(),
            &env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            &env::var("DB_PORT").unwrap_or_else(|_| "5432".into()),
            &env::var("DB_NAME").unwrap_or_else(|_| "mood".into()),
        )?;

        Ok(Self {
            database_url,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a number")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".into())
                .parse()
                .context("PORT must be a number")?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An explicit `DATABASE_URL` wins; otherwise the URL is assembled from the
/// individual credentials, both of which are then required.
fn database_url(
    explicit: Option<String>,
    user: Option<String>,
    pass: Option<String>,
    host: &str,
    port: &str,
    name: &str,
) -> anyhow::Result<String> {
    if let Some(url) = explicit.filter(|u| !u.is_empty()) {
        return Ok(url);
    }

    match (user, pass) {
        (Some(user), Some(pass)) if !user.is_empty() => {
            Ok(format!("postgres://{user}:{pass}@{host}:{port}/{name}"))
        }
        _ => bail!("DATABASE_URL or DB_USER and DB_PASS must be set"),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
