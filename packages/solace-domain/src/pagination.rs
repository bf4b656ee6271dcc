use serde::{Deserialize, Serialize};

/// Effective page and page size after coercing raw query-string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
	pub page: u32,
	pub limit: u32,
}
impl PageRequest {
	/// Coerces raw `page`/`limit` strings.
	///
	/// Values are read with [`parse_int`]. Missing, unreadable, or non-positive values fall back to
	/// the configured defaults. Any positive `limit` is honored as given. Nothing is rejected.
	pub fn resolve(page: Option<&str>, limit: Option<&str>, cfg: &solace_config::Query) -> Self {
		let page = coerce(page, cfg.default_page);
		let limit = coerce(limit, cfg.default_limit);

		Self { page, limit }
	}

	/// Rows skipped before this page.
	pub fn offset(&self) -> i64 {
		(i64::from(self.page) - 1).saturating_mul(i64::from(self.limit))
	}
}

/// Reads the leading base-10 integer of `raw`, ignoring leading whitespace and trailing garbage.
///
/// `"42"`, `"  42px"`, and `"+42.9"` all read as 42; `""`, `"abc"`, and `"-"` read as nothing.
/// Values beyond the `i64` range saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
	let trimmed = raw.trim_start();
	let (negative, digits) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};
	let digits = &digits[..digits.bytes().take_while(u8::is_ascii_digit).count()];

	if digits.is_empty() {
		return None;
	}

	let magnitude = digits.bytes().fold(0_i64, |acc, byte| {
		acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
	});

	Some(if negative { -magnitude } else { magnitude })
}

fn coerce(raw: Option<&str>, default: u32) -> u32 {
	raw.and_then(parse_int)
		.filter(|value| *value >= 1)
		.map(|value| u32::try_from(value).unwrap_or(u32::MAX))
		.unwrap_or(default)
}
