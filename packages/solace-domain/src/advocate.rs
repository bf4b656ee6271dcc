use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A directory entry as served by `GET /advocates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
	pub id: i32,
	pub first_name: String,
	pub last_name: String,
	pub city: String,
	pub degree: String,
	pub specialties: Vec<String>,
	pub years_of_experience: i32,
	pub phone_number: i64,
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
}
impl Advocate {
	/// Exact, case-sensitive membership test used by tag selection.
	pub fn has_specialty(&self, tag: &str) -> bool {
		self.specialties.iter().any(|specialty| specialty == tag)
	}
}
