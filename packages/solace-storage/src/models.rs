use sqlx::types::Json;
use time::PrimitiveDateTime;

use solace_domain::Advocate;

#[derive(Debug, sqlx::FromRow)]
pub struct AdvocateRow {
	pub id: i32,
	pub first_name: String,
	pub last_name: String,
	pub city: String,
	pub degree: String,
	#[sqlx(rename = "payload")]
	pub specialties: Json<Vec<String>>,
	pub years_of_experience: i32,
	pub phone_number: i64,
	/// Stored without a zone; read back as UTC.
	pub created_at: Option<PrimitiveDateTime>,
}
impl From<AdvocateRow> for Advocate {
	fn from(row: AdvocateRow) -> Self {
		Self {
			id: row.id,
			first_name: row.first_name,
			last_name: row.last_name,
			city: row.city,
			degree: row.degree,
			specialties: row.specialties.0,
			years_of_experience: row.years_of_experience,
			phone_number: row.phone_number,
			created_at: row.created_at.map(PrimitiveDateTime::assume_utc),
		}
	}
}
