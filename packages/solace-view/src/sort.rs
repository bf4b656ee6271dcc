use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use solace_domain::Advocate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
	FirstName,
	LastName,
	City,
	Degree,
	YearsOfExperience,
	PhoneNumber,
}
impl SortKey {
	pub const ALL: [Self; 6] = [
		Self::FirstName,
		Self::LastName,
		Self::City,
		Self::Degree,
		Self::YearsOfExperience,
		Self::PhoneNumber,
	];

	pub fn label(self) -> &'static str {
		match self {
			Self::FirstName => "First Name",
			Self::LastName => "Last Name",
			Self::City => "City",
			Self::Degree => "Degree",
			Self::YearsOfExperience => "Years of Experience",
			Self::PhoneNumber => "Phone Number",
		}
	}

	/// Three-way comparison on this column. Text compares by UTF-16 code units.
	pub fn compare(self, a: &Advocate, b: &Advocate) -> Ordering {
		let text = |a: &str, b: &str| a.encode_utf16().cmp(b.encode_utf16());

		match self {
			Self::FirstName => text(&a.first_name, &b.first_name),
			Self::LastName => text(&a.last_name, &b.last_name),
			Self::City => text(&a.city, &b.city),
			Self::Degree => text(&a.degree, &b.degree),
			Self::YearsOfExperience => a.years_of_experience.cmp(&b.years_of_experience),
			Self::PhoneNumber => a.phone_number.cmp(&b.phone_number),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Asc,
	Desc,
}
impl SortDirection {
	/// Orients an ascending comparison. Equal stays equal, so ties keep their order either way.
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Asc => ordering,
			Self::Desc => ordering.reverse(),
		}
	}

	pub fn arrow(self) -> &'static str {
		match self {
			Self::Asc => "▲",
			Self::Desc => "▼",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	pub key: SortKey,
	pub direction: SortDirection,
}
