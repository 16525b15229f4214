//! Process configuration loaded once at startup.
//!
//! Values come from environment variables (a `.env` file is loaded by `main` beforehand) and
//! are collected into an explicit [`Config`] which is passed by reference to the components
//! that need it.

use std::path::PathBuf;

use crate::server::error::config::ConfigError;

/// Minimum secret length accepted by the signed cookie key
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

static DEFAULT_PORT: u16 = 8080;
static DEFAULT_PUBLIC_DIR: &str = "public";
static DEFAULT_UPLOAD_DIR: &str = "public/uploads";
static DEFAULT_UPLOAD_URL: &str = "/uploads";

/// Runtime mode, controls error detail exposure and cookie security
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Where uploaded images are stored
#[derive(Clone, Debug, PartialEq)]
pub enum UploadConfig {
    /// Write into a local directory which is served under `url_prefix`
    Local { dir: PathBuf, url_prefix: String },
    /// Upload to an S3 compatible bucket
    S3 {
        bucket: String,
        region: Option<String>,
        endpoint: Option<String>,
        public_url: Option<String>,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub cookie_secret: String,
    pub database_url: String,
    pub mode: RunMode,
    pub public_dir: PathBuf,
    pub upload: UploadConfig,
    pub cors_origin: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `COOKIE_SECRET` or `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be used
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let port = match var("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let cookie_secret = required("COOKIE_SECRET")?;
        if cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "COOKIE_SECRET".to_string(),
                reason: format!("must be at least {} bytes long", MIN_COOKIE_SECRET_LEN),
            });
        }

        let database_url = required("DATABASE_URL")?;

        let mode = match var("APP_ENV").as_deref() {
            None | Some("development") => RunMode::Development,
            Some("production") => RunMode::Production,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "APP_ENV".to_string(),
                    reason: format!("expected `development` or `production`, got `{}`", other),
                })
            }
        };

        let public_dir = PathBuf::from(var("PUBLIC_DIR").unwrap_or(DEFAULT_PUBLIC_DIR.to_string()));

        let upload = match var("S3_BUCKET") {
            Some(bucket) => UploadConfig::S3 {
                bucket,
                region: var("S3_REGION"),
                endpoint: var("S3_ENDPOINT"),
                public_url: var("S3_PUBLIC_URL"),
            },
            None => UploadConfig::Local {
                dir: PathBuf::from(var("UPLOAD_DIR").unwrap_or(DEFAULT_UPLOAD_DIR.to_string())),
                url_prefix: DEFAULT_UPLOAD_URL.to_string(),
            },
        };

        Ok(Self {
            port,
            cookie_secret,
            database_url,
            mode,
            public_dir,
            upload,
            cors_origin: var("CORS_ORIGIN"),
        })
    }
}
