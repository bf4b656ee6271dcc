pub fn render_schema() -> String {
	expand_includes(include_str!("../../../sql/init.sql"))
}

/// Inlines `\ir` directives so the bundle can be executed without `psql`.
fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		match line.trim().strip_prefix("\\ir ").map(str::trim) {
			Some("tables/001_advocates.sql") =>
				out.push_str(include_str!("../../../sql/tables/001_advocates.sql")),
			Some(_) | None => out.push_str(line),
		}

		out.push('\n');
	}

	out
}

/// Splits a rendered bundle into executable statements, dropping blanks.
pub fn statements(sql: &str) -> Vec<&str> {
	sql.split(';').map(str::trim).filter(|statement| !statement.is_empty()).collect()
}
