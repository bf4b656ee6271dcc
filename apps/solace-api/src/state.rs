use std::sync::Arc;

use solace_service::AdvocateService;
use solace_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AdvocateService>,
}
impl AppState {
	/// Connects to the store and brings its schema up to date.
	pub async fn new(config: solace_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(AdvocateService::new(config, db)))
	}

	pub fn from_service(service: AdvocateService) -> Self {
		Self { service: Arc::new(service) }
	}
}
