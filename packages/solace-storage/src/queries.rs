use sqlx::{Postgres, QueryBuilder};

use solace_domain::{PageRequest, SearchTerm};

use crate::{Result, db::Db, models::AdvocateRow};

const ADVOCATE_COLUMNS: &str = "\
SELECT id, first_name, last_name, city, degree, payload, years_of_experience, phone_number, created_at
FROM advocates";

/// One page of advocates matching `term`, in ascending `id` order.
pub async fn list_advocates(
	db: &Db,
	term: Option<&SearchTerm>,
	page: PageRequest,
) -> Result<Vec<AdvocateRow>> {
	let mut builder = QueryBuilder::<Postgres>::new(ADVOCATE_COLUMNS);

	if let Some(term) = term {
		builder.push(" WHERE ");
		push_search_predicate(&mut builder, term);
	}

	builder.push(" ORDER BY id LIMIT ");
	builder.push_bind(i64::from(page.limit));
	builder.push(" OFFSET ");
	builder.push_bind(page.offset());

	let rows: Vec<AdvocateRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

/// Number of advocates matching `term`, ignoring pagination.
pub async fn count_advocates(db: &Db, term: Option<&SearchTerm>) -> Result<i64> {
	let mut builder = QueryBuilder::<Postgres>::new("SELECT count(*) FROM advocates");

	if let Some(term) = term {
		builder.push(" WHERE ");
		push_search_predicate(&mut builder, term);
	}

	let total: i64 = builder.build_query_scalar().fetch_one(&db.pool).await?;

	Ok(total)
}

/// Appends the parenthesized match condition for `term`.
///
/// Text columns and specialties are matched with `ILIKE` against the escaped pattern. A numeric term
/// adds `years_of_experience >= n`.
pub fn push_search_predicate(builder: &mut QueryBuilder<'_, Postgres>, term: &SearchTerm) {
	let pattern = term.like_pattern();

	builder.push("(");

	for (idx, column) in ["first_name", "last_name", "city", "degree"].into_iter().enumerate() {
		if idx > 0 {
			builder.push(" OR ");
		}

		builder.push(column);
		builder.push(" ILIKE ");
		builder.push_bind(pattern.clone());
		builder.push(" ESCAPE '\\'");
	}

	builder.push(
		" OR EXISTS (SELECT 1 FROM jsonb_array_elements_text(payload) AS specialty WHERE specialty ILIKE ",
	);
	builder.push_bind(pattern);
	builder.push(" ESCAPE '\\')");

	if let Some(min_years) = term.number() {
		builder.push(" OR years_of_experience >= ");
		builder.push_bind(min_years);
	}

	builder.push(")");
}
