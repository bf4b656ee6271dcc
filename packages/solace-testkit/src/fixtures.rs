//! Advocate rows for seeding test databases.

use sqlx::{PgPool, types::Json};

use crate::Result;

#[derive(Debug, Clone)]
pub struct NewAdvocate {
	pub first_name: String,
	pub last_name: String,
	pub city: String,
	pub degree: String,
	pub specialties: Vec<String>,
	pub years_of_experience: i32,
	pub phone_number: i64,
}
impl NewAdvocate {
	pub fn new(
		first_name: &str,
		last_name: &str,
		city: &str,
		degree: &str,
		specialties: &[&str],
		years_of_experience: i32,
		phone_number: i64,
	) -> Self {
		Self {
			first_name: first_name.to_string(),
			last_name: last_name.to_string(),
			city: city.to_string(),
			degree: degree.to_string(),
			specialties: specialties.iter().map(|specialty| specialty.to_string()).collect(),
			years_of_experience,
			phone_number,
		}
	}
}

/// Inserts `advocates` in order and returns their assigned ids.
pub async fn insert_advocates(pool: &PgPool, advocates: &[NewAdvocate]) -> Result<Vec<i32>> {
	let mut ids = Vec::with_capacity(advocates.len());

	for advocate in advocates {
		let id: i32 = sqlx::query_scalar(
			"\
INSERT INTO advocates (
	first_name,
	last_name,
	city,
	degree,
	payload,
	years_of_experience,
	phone_number
)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING id",
		)
		.bind(advocate.first_name.as_str())
		.bind(advocate.last_name.as_str())
		.bind(advocate.city.as_str())
		.bind(advocate.degree.as_str())
		.bind(Json(&advocate.specialties))
		.bind(advocate.years_of_experience)
		.bind(advocate.phone_number)
		.fetch_one(pool)
		.await?;

		ids.push(id);
	}

	Ok(ids)
}

/// A small roster covering text, numeric, and exact-tag searches.
pub fn sample_advocates() -> Vec<NewAdvocate> {
	vec![
		NewAdvocate::new("John", "Doe", "New York", "MD", &["Bipolar", "LGBTQ"], 10, 5_551_234_567),
		NewAdvocate::new("Jane", "Smith", "Los Angeles", "PhD", &["Bipolar disorder"], 8, 5_559_876_543),
		NewAdvocate::new("Alice", "Johnson", "Chicago", "MSW", &["Trauma & PTSD"], 5, 5_554_567_890),
		NewAdvocate::new("Michael", "Brown", "Houston", "MD", &["Eating disorders"], 12, 5_556_543_210),
		NewAdvocate::new("Emily", "Davis", "Phoenix", "PhD", &["Personality disorders"], 7, 5_553_210_987),
		NewAdvocate::new("Chris", "Martinez", "Philadelphia", "MSW", &["Suicide prevention"], 9, 5_557_890_123),
		NewAdvocate::new("Jessica", "Taylor", "San Antonio", "MD", &["Sleep issues", "5"], 3, 5_554_561_234),
		NewAdvocate::new("David", "Harris", "San Diego", "PhD", &["Bipolar", "Schizophrenia"], 6, 555_123),
		NewAdvocate::new("Laura", "Clark", "Dallas", "MSW", &["100%_recovery"], 4, 5_551_238_765),
		NewAdvocate::new("Daniel", "Lewis", "San Jose", "MD", &[], 13, 5_559_873_456),
	]
}
