use time::macros::datetime;

use solace_domain::{
	Advocate, ListRequest, PageRequest, SearchTerm,
	pagination::parse_int,
	phone::format_phone_number,
	search::{self, parse_number},
};

fn advocate(id: i32, first: &str, last: &str, city: &str, specialties: &[&str], years: i32) -> Advocate {
	Advocate {
		id,
		first_name: first.to_string(),
		last_name: last.to_string(),
		city: city.to_string(),
		degree: "MD".to_string(),
		specialties: specialties.iter().map(|s| s.to_string()).collect(),
		years_of_experience: years,
		phone_number: 5_551_234_567,
		created_at: None,
	}
}

fn roster() -> Vec<Advocate> {
	vec![
		advocate(1, "John", "Doe", "New York", &["Bipolar", "LGBTQ"], 10),
		advocate(2, "Jane", "Smith", "Los Angeles", &["Bipolar disorder"], 8),
		advocate(3, "Alice", "Johnson", "Chicago", &["Trauma & PTSD"], 5),
		advocate(4, "Michael", "Brown", "Houston", &["Eating disorders"], 12),
		advocate(5, "Emily", "Davis", "Phoenix", &["5"], 2),
	]
}

fn ids(advocates: &[Advocate]) -> Vec<i32> {
	advocates.iter().map(|advocate| advocate.id).collect()
}

fn query_cfg() -> solace_config::Query {
	solace_config::Query { default_page: 1, default_limit: 10 }
}

#[test]
fn empty_term_is_no_filter() {
	assert!(SearchTerm::parse("").is_none());
	assert_eq!(ids(&search::filter(&roster(), "")), vec![1, 2, 3, 4, 5]);
}

#[test]
fn text_term_is_lowercased_and_has_no_threshold() {
	let term = SearchTerm::parse("NeW YoRk").expect("Expected a term.");

	assert_eq!(term.text(), "new york");
	assert_eq!(term.number(), None);
	assert_eq!(ids(&search::filter(&roster(), "NeW YoRk")), vec![1]);
}

#[test]
fn text_term_matches_every_substring_column() {
	let roster = roster();

	assert_eq!(ids(&search::filter(&roster, "john")), vec![1, 3]);
	assert_eq!(ids(&search::filter(&roster, "chic")), vec![3]);
	assert_eq!(ids(&search::filter(&roster, "md")), vec![1, 2, 3, 4, 5]);
	assert_eq!(ids(&search::filter(&roster, "ptsd")), vec![3]);
	assert_eq!(ids(&search::filter(&roster, "zzz")), Vec::<i32>::new());
}

#[test]
fn numeric_term_adds_years_threshold() {
	let roster = roster();
	let matched = search::filter(&roster, "9");

	// Years >= 9 or a literal "9" somewhere.
	assert_eq!(ids(&matched), vec![1, 4]);

	for advocate in &matched {
		assert!(advocate.years_of_experience >= 9);
	}
}

#[test]
fn numeric_term_also_matches_substrings() {
	// Emily has 2 years but a specialty literally named "5".
	assert_eq!(ids(&search::filter(&roster(), "5")), vec![1, 2, 3, 4, 5]);
	assert_eq!(ids(&search::filter(&roster(), "11")), vec![4]);
}

#[test]
fn substring_is_literal() {
	let mut roster = roster();

	roster[0].degree = "100%_sure".to_string();

	assert_eq!(ids(&search::filter(&roster, "%_")), vec![1]);
	assert_eq!(ids(&search::filter(&roster, "_")), vec![1]);
	assert_eq!(ids(&search::filter(&roster, "&")), vec![3]);
}

#[test]
fn like_pattern_escapes_metacharacters() {
	let term = SearchTerm::parse("50%_off\\").expect("Expected a term.");

	assert_eq!(term.like_pattern(), "%50\\%\\_off\\\\%");
	assert_eq!(SearchTerm::parse("Bi").expect("Expected a term.").like_pattern(), "%bi%");
}

#[test]
fn numbers_follow_literal_rules() {
	assert_eq!(parse_number("5"), Some(5.0));
	assert_eq!(parse_number("  7 "), Some(7.0));
	assert_eq!(parse_number(" "), Some(0.0));
	assert_eq!(parse_number("-3"), Some(-3.0));
	assert_eq!(parse_number("+2.5"), Some(2.5));
	assert_eq!(parse_number(".5"), Some(0.5));
	assert_eq!(parse_number("5."), Some(5.0));
	assert_eq!(parse_number("1e2"), Some(100.0));
	assert_eq!(parse_number("0x1f"), Some(31.0));
	assert_eq!(parse_number("0b101"), Some(5.0));
	assert_eq!(parse_number("0o17"), Some(15.0));
	assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));

	for raw in ["abc", "12abc", "1e", ".", "-", "0x", "-0x10", "infinity", "inf", "nan", "1 2"] {
		assert_eq!(parse_number(raw), None, "{raw:?} must not read as a number.");
	}
}

#[test]
fn whitespace_term_matches_everyone_through_zero_threshold() {
	assert_eq!(SearchTerm::parse(" ").expect("Expected a term.").number(), Some(0.0));
	assert_eq!(ids(&search::filter(&roster(), " ")), vec![1, 2, 3, 4, 5]);
}

#[test]
fn exact_tag_membership_is_case_sensitive() {
	let roster = roster();

	assert!(roster[0].has_specialty("Bipolar"));
	assert!(!roster[1].has_specialty("Bipolar"));
	assert!(!roster[0].has_specialty("bipolar"));
}

#[test]
fn parse_int_reads_leading_integer() {
	assert_eq!(parse_int("42"), Some(42));
	assert_eq!(parse_int("  42px"), Some(42));
	assert_eq!(parse_int("+42.9"), Some(42));
	assert_eq!(parse_int("-7"), Some(-7));
	assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
	assert_eq!(parse_int(""), None);
	assert_eq!(parse_int("abc"), None);
	assert_eq!(parse_int("-"), None);
}

#[test]
fn page_request_uses_defaults_when_absent() {
	let request = PageRequest::resolve(None, None, &query_cfg());

	assert_eq!(request, PageRequest { page: 1, limit: 10 });
	assert_eq!(request.offset(), 0);
}

#[test]
fn page_request_coerces_malformed_values() {
	let cfg = query_cfg();

	assert_eq!(PageRequest::resolve(Some("3abc"), Some("5"), &cfg), PageRequest { page: 3, limit: 5 });
	assert_eq!(PageRequest::resolve(Some("abc"), Some("x"), &cfg), PageRequest { page: 1, limit: 10 });
	assert_eq!(PageRequest::resolve(Some("0"), Some("-4"), &cfg), PageRequest { page: 1, limit: 10 });
	assert_eq!(PageRequest::resolve(Some(""), Some(""), &cfg), PageRequest { page: 1, limit: 10 });
}

#[test]
fn page_request_honors_large_limits_and_computes_offset() {
	let request = PageRequest::resolve(Some("4"), Some("500"), &query_cfg());

	assert_eq!(request, PageRequest { page: 4, limit: 500 });
	assert_eq!(request.offset(), 1_500);

	let request = PageRequest::resolve(Some("1"), Some("500"), &solace_config::Query::default());

	assert_eq!(request, PageRequest { page: 1, limit: 500 });
}

#[test]
fn phone_numbers_format_only_at_ten_digits() {
	assert_eq!(format_phone_number(5_551_234_567), "555-123-4567");
	assert_eq!(format_phone_number(123), "123");
	assert_eq!(format_phone_number(55_512_345_678), "55512345678");
}

#[test]
fn advocate_wire_shape_is_camel_case() {
	let mut advocate = advocate(7, "Chris", "Martinez", "Austin", &["Bipolar"], 3);

	advocate.created_at = Some(datetime!(2024-01-02 03:04:05 UTC));

	let json = serde_json::to_value(&advocate).expect("Failed to serialize advocate.");

	assert_eq!(json["firstName"], "Chris");
	assert_eq!(json["yearsOfExperience"], 3);
	assert_eq!(json["phoneNumber"], 5_551_234_567_i64);
	assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");

	let decoded: Advocate = serde_json::from_value(json).expect("Failed to decode advocate.");

	assert_eq!(decoded, advocate);
}

#[test]
fn advocate_without_created_at_decodes() {
	let json = serde_json::json!({
		"id": 1,
		"firstName": "John",
		"lastName": "Doe",
		"city": "New York",
		"degree": "MD",
		"specialties": [],
		"yearsOfExperience": 10,
		"phoneNumber": 5551234567_i64
	});
	let decoded: Advocate = serde_json::from_value(json).expect("Failed to decode advocate.");

	assert_eq!(decoded.created_at, None);
}

#[test]
fn list_request_keeps_first_of_repeated_keys() {
	let pairs = [("page", "1"), ("search", "San"), ("page", "2"), ("sort", "city"), ("limit", "")]
		.into_iter()
		.map(|(key, value)| (key.to_string(), value.to_string()));
	let req = ListRequest::from_pairs(pairs);

	assert_eq!(
		req,
		ListRequest {
			search: Some("San".to_string()),
			page: Some("1".to_string()),
			limit: Some(String::new()),
		}
	);
	assert_eq!(ListRequest::from_pairs(Vec::new()), ListRequest::default());
}
