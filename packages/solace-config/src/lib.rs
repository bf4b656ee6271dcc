mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Query, Service, Storage};

use std::{env, fs, path::Path};

/// Environment variable holding the Postgres connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Loads the config file (or defaults when `path` is `None`), applies `DATABASE_URL`, and validates
/// the result.
pub fn load(path: Option<&Path>) -> Result<Config> {
	let mut cfg = match path {
		Some(path) => parse_file(path)?,
		None => Config::default(),
	};

	apply_env(&mut cfg, env::var(DATABASE_URL_ENV).ok());
	normalize(&mut cfg);
	validate(&cfg)?;

	Ok(cfg)
}

pub fn parse_file(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	toml::from_str(&raw).map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })
}

/// A non-blank `database_url` wins over the file's `storage.postgres.dsn`.
pub fn apply_env(cfg: &mut Config, database_url: Option<String>) {
	if let Some(url) = database_url
		&& !url.trim().is_empty()
	{
		cfg.storage.postgres.dsn = url;
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::MissingDatabaseUrl { name: DATABASE_URL_ENV });
	}
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.query.default_page == 0 {
		return Err(Error::Validation {
			message: "query.default_page must be greater than zero.".to_string(),
		});
	}
	if cfg.query.default_limit == 0 {
		return Err(Error::Validation {
			message: "query.default_limit must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.postgres.dsn = cfg.storage.postgres.dsn.trim().to_string();
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();

	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
