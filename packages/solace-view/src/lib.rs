//! In-memory directory state behind the terminal client.
//!
//! A [`DirectoryView`] keeps the page fetched at load time untouched and derives the displayed rows
//! from it. Filtering and tag selection always start over from the fetched rows, while sorting
//! reorders whatever is currently displayed.

pub mod sort;

mod row;

pub use row::DisplayRow;
pub use sort::{SortConfig, SortDirection, SortKey};

use solace_domain::{Advocate, search};

#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
	original: Vec<Advocate>,
	displayed: Vec<Advocate>,
	search_term: String,
	sort: Option<SortConfig>,
}
impl DirectoryView {
	pub fn new(advocates: Vec<Advocate>) -> Self {
		Self { displayed: advocates.clone(), original: advocates, ..Default::default() }
	}

	/// Rows exactly as fetched.
	pub fn original(&self) -> &[Advocate] {
		&self.original
	}

	pub fn displayed(&self) -> &[Advocate] {
		&self.displayed
	}

	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	pub fn sort_config(&self) -> Option<SortConfig> {
		self.sort
	}

	/// Recomputes the displayed rows from the fetched rows with the shared search rule.
	pub fn filter(&mut self, raw: &str) {
		self.search_term = raw.to_lowercase();
		self.displayed = search::filter(&self.original, raw);
	}

	/// Toggles the direction for `key` and stably reorders the displayed rows.
	pub fn sort(&mut self, key: SortKey) {
		let direction = match self.sort {
			Some(SortConfig { key: current, direction: SortDirection::Asc }) if current == key =>
				SortDirection::Desc,
			_ => SortDirection::Asc,
		};

		self.sort = Some(SortConfig { key, direction });
		self.displayed.sort_by(|a, b| direction.apply(key.compare(a, b)));
	}

	/// Shows only the fetched rows that list `tag` verbatim among their specialties.
	pub fn click_tag(&mut self, tag: &str) {
		self.search_term = tag.to_string();
		self.displayed =
			self.original.iter().filter(|advocate| advocate.has_specialty(tag)).cloned().collect();
	}

	/// Clears the search and restores fetch order. The sort configuration is kept.
	pub fn reset(&mut self) {
		self.search_term.clear();
		self.displayed = self.original.clone();
	}

	pub fn rows(&self) -> Vec<DisplayRow> {
		self.displayed.iter().map(DisplayRow::from).collect()
	}
}
