use solace_domain::{Advocate, ListMeta, ListRequest, ListResponse, PageRequest, SearchTerm};
use solace_storage::queries;

use crate::{AdvocateService, Result};

impl AdvocateService {
	pub async fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let page = PageRequest::resolve(req.page.as_deref(), req.limit.as_deref(), &self.cfg.query);
		let term = SearchTerm::parse(req.search.as_deref().unwrap_or_default());
		let (rows, total) = tokio::try_join!(
			queries::list_advocates(&self.db, term.as_ref(), page),
			queries::count_advocates(&self.db, term.as_ref()),
		)?;

		tracing::debug!(
			search = term.as_ref().map(SearchTerm::text),
			page = page.page,
			limit = page.limit,
			returned = rows.len(),
			total,
			"Listed advocates."
		);

		Ok(ListResponse {
			data: rows.into_iter().map(Advocate::from).collect(),
			meta: ListMeta { total, page: page.page, limit: page.limit },
		})
	}
}
