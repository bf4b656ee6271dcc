//! Wire shapes of `GET /advocates`.

use serde::{Deserialize, Serialize};

use crate::Advocate;

/// Raw query-string values. They are coerced server-side, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<String>,
}

impl ListRequest {
	/// Builds a request from decoded query pairs. The first occurrence of each key wins and unknown
	/// keys are ignored.
	pub fn from_pairs<I>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut req = Self::default();

		for (key, value) in pairs {
			let slot = match key.as_str() {
				"search" => &mut req.search,
				"page" => &mut req.page,
				"limit" => &mut req.limit,
				_ => continue,
			};

			if slot.is_none() {
				*slot = Some(value);
			}
		}

		req
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
	pub data: Vec<Advocate>,
	pub meta: ListMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
	/// Matching rows across all pages.
	pub total: i64,
	pub page: u32,
	pub limit: u32,
}
