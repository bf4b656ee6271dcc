/// Renders a 10-digit phone number as `XXX-XXX-XXXX`; other lengths are returned unchanged.
pub fn format_phone_number(phone_number: i64) -> String {
	let digits = phone_number.to_string();

	if digits.len() != 10 {
		return digits;
	}

	format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
