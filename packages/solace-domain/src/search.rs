//! Search-term matching shared by the HTTP query and the in-memory view.
//!
//! A term matches an advocate when the lowercased term is a substring of the first name, last
//! name, city, degree, or any specialty. When the term also reads as a number, advocates with at
//! least that many years of experience match as well. Both sides evaluate the same rule; the store
//! side renders it into SQL from [`SearchTerm::like_pattern`] and [`SearchTerm::number`].

use crate::Advocate;

/// Escape character used in rendered `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
	text: String,
	number: Option<f64>,
}
impl SearchTerm {
	/// Returns `None` for the empty string, which means "no filter".
	pub fn parse(raw: &str) -> Option<Self> {
		if raw.is_empty() {
			return None;
		}

		let text = raw.to_lowercase();
		let number = parse_number(&text);

		Some(Self { text, number })
	}

	/// The lowercased term.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The years-of-experience threshold, when the term reads as a number.
	pub fn number(&self) -> Option<f64> {
		self.number
	}

	/// `%term%` with LIKE metacharacters escaped by [`LIKE_ESCAPE`].
	pub fn like_pattern(&self) -> String {
		let mut pattern = String::with_capacity(self.text.len() + 2);

		pattern.push('%');

		for ch in self.text.chars() {
			if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
				pattern.push(LIKE_ESCAPE);
			}

			pattern.push(ch);
		}

		pattern.push('%');

		pattern
	}

	pub fn matches(&self, advocate: &Advocate) -> bool {
		let contains = |value: &str| value.to_lowercase().contains(&self.text);

		contains(&advocate.first_name)
			|| contains(&advocate.last_name)
			|| contains(&advocate.city)
			|| contains(&advocate.degree)
			|| advocate.specialties.iter().any(|specialty| contains(specialty))
			|| self.number.is_some_and(|min| f64::from(advocate.years_of_experience) >= min)
	}
}

/// Filters `advocates` with `raw`, keeping input order. An empty term keeps everything.
pub fn filter<'a, I>(advocates: I, raw: &str) -> Vec<Advocate>
where
	I: IntoIterator<Item = &'a Advocate>,
{
	match SearchTerm::parse(raw) {
		Some(term) =>
			advocates.into_iter().filter(|advocate| term.matches(advocate)).cloned().collect(),
		None => advocates.into_iter().cloned().collect(),
	}
}

/// Reads `raw` as a numeric literal.
///
/// Surrounding whitespace is ignored and a blank string reads as zero. Accepted forms are signed
/// decimals with an optional fraction and exponent, `Infinity` with an optional sign, and unsigned
/// `0x`, `0o`, or `0b` integers. Everything else, including `inf` and `nan`, is not a number.
pub fn parse_number(raw: &str) -> Option<f64> {
	let trimmed = raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}');

	if trimmed.is_empty() {
		return Some(0.0);
	}
	if let Some(value) = parse_prefixed_integer(trimmed) {
		return Some(value);
	}

	let (negative, unsigned) = match trimmed.as_bytes()[0] {
		b'-' => (true, &trimmed[1..]),
		b'+' => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	if unsigned == "Infinity" {
		return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
	}
	if !is_decimal_literal(unsigned) {
		return None;
	}

	let value = unsigned.parse::<f64>().ok()?;

	Some(if negative { -value } else { value })
}

fn parse_prefixed_integer(raw: &str) -> Option<f64> {
	let bytes = raw.as_bytes();

	if bytes.len() < 3 || bytes[0] != b'0' {
		return None;
	}

	let radix = match bytes[1] {
		b'x' | b'X' => 16,
		b'o' | b'O' => 8,
		b'b' | b'B' => 2,
		_ => return None,
	};

	raw[2..].chars().try_fold(0.0_f64, |acc, ch| {
		ch.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
	})
}

// digits [ "." digits ] [ exponent ] | "." digits [ exponent ], with at least one mantissa digit.
fn is_decimal_literal(raw: &str) -> bool {
	let bytes = raw.as_bytes();
	let mut idx = 0;
	let int_digits = count_digits(&bytes[idx..]);

	idx += int_digits;

	let mut frac_digits = 0;

	if bytes.get(idx) == Some(&b'.') {
		idx += 1;
		frac_digits = count_digits(&bytes[idx..]);
		idx += frac_digits;
	}
	if int_digits + frac_digits == 0 {
		return false;
	}
	if matches!(bytes.get(idx), Some(b'e' | b'E')) {
		idx += 1;

		if matches!(bytes.get(idx), Some(b'+' | b'-')) {
			idx += 1;
		}

		let exp_digits = count_digits(&bytes[idx..]);

		if exp_digits == 0 {
			return false;
		}

		idx += exp_digits;
	}

	idx == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
