use solace_domain::{Advocate, phone::format_phone_number};

/// One table row rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
	pub first_name: String,
	pub last_name: String,
	pub city: String,
	pub degree: String,
	pub specialties: Vec<String>,
	pub years_of_experience: String,
	pub phone_number: String,
}
impl From<&Advocate> for DisplayRow {
	fn from(advocate: &Advocate) -> Self {
		Self {
			first_name: advocate.first_name.clone(),
			last_name: advocate.last_name.clone(),
			city: advocate.city.clone(),
			degree: advocate.degree.clone(),
			specialties: advocate.specialties.clone(),
			years_of_experience: advocate.years_of_experience.to_string(),
			phone_number: format_phone_number(advocate.phone_number),
		}
	}
}
