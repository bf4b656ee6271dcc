use serde::Deserialize;

use crate::{Error, Result};
use solace_domain::{ListRequest, ListResponse};

#[derive(Debug, Deserialize)]
struct ErrorBody {
	error: String,
}

/// Thin `GET /advocates` client.
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: reqwest::Client,
	base: String,
}
impl ApiClient {
	pub fn new(base: &str) -> Result<Self> {
		let base = base.trim_end_matches('/');

		if !(base.starts_with("http://") || base.starts_with("https://")) {
			return Err(Error::InvalidBaseUrl { url: base.to_string() });
		}

		let http =
			reqwest::Client::builder().user_agent(solace_cli::user_agent("solace-tui")).build()?;

		Ok(Self { http, base: base.to_string() })
	}

	pub fn advocates_url(&self) -> String {
		format!("{}/advocates", self.base)
	}

	/// Fetches one page. Non-2xx answers surface the server's `error` text when it has one.
	pub async fn list(&self, req: &ListRequest) -> Result<ListResponse> {
		let response = self.http.get(self.advocates_url()).query(req).send().await?;
		let status = response.status();

		if !status.is_success() {
			let message = match response.json::<ErrorBody>().await {
				Ok(body) => body.error,
				Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
			};

			return Err(Error::Api { status: status.as_u16(), message });
		}

		Ok(response.json().await?)
	}
}
