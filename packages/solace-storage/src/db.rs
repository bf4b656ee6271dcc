use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{Error, Result, schema};

/// Serializes concurrent schema bootstraps across server processes.
const SCHEMA_LOCK_ID: i64 = 7_120_115;

/// Owned handle to the advocate store.
#[derive(Clone)]
pub struct Db {
	pub pool: PgPool,
}
impl Db {
	pub async fn connect(cfg: &solace_config::Postgres) -> Result<Self> {
		let pool =
			PgPoolOptions::new().max_connections(cfg.pool_max_conns).connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	/// Wraps an existing pool, e.g. a lazily connected one.
	pub fn from_pool(pool: PgPool) -> Self {
		Self { pool }
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let sql = schema::render_schema();
		// Advisory locks are held per connection. Use a single transaction so the lock is scoped to
		// one connection and automatically released when the transaction ends.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)")
			.bind(SCHEMA_LOCK_ID)
			.execute(&mut *tx)
			.await?;

		for statement in schema::statements(&sql) {
			if statement.lines().any(|line| line.trim_start().starts_with("\\ir ")) {
				return Err(Error::Schema(statement.to_string()));
			}

			sqlx::query(statement).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		tracing::debug!("Advocate schema is up to date.");

		Ok(())
	}

	pub async fn close(&self) {
		self.pool.close().await;
	}
}
