mod list;

mod error;

pub use error::{Error, Result};
pub use solace_domain::{ListMeta, ListRequest, ListResponse};

use solace_config::Config;
use solace_storage::db::Db;

/// Read-only query service over the advocate store.
pub struct AdvocateService {
	pub cfg: Config,
	pub db: Db,
}
impl AdvocateService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}
}
