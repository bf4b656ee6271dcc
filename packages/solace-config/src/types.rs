use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub query: Query,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { http_bind: "127.0.0.1:3000".to_string(), log_level: "info".to_string() }
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Postgres {
	/// Overridden by `DATABASE_URL` when that variable is set.
	pub dsn: String,
	pub pool_max_conns: u32,
}
impl Default for Postgres {
	fn default() -> Self {
		Self { dsn: String::new(), pool_max_conns: 5 }
	}
}

/// Pagination defaults for `GET /advocates`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Query {
	pub default_page: u32,
	pub default_limit: u32,
}
impl Default for Query {
	fn default() -> Self {
		Self { default_page: 1, default_limit: 10 }
	}
}
