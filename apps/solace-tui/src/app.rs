use solace_domain::{ListMeta, ListResponse};
use solace_view::DirectoryView;

use crate::keys::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
	Info(String),
	Error(String),
}

/// Terminal client state: the directory view plus cursor and search-box bookkeeping.
#[derive(Debug, Default)]
pub struct App {
	pub view: DirectoryView,
	pub search_input: String,
	pub meta: Option<ListMeta>,
	pub selected_row: usize,
	pub selected_tag: usize,
	pub status: Option<Status>,
	pub should_quit: bool,
}
impl App {
	pub fn loaded(response: ListResponse) -> Self {
		let status = Status::Info(format!(
			"Fetched {} of {} advocates (page {}, limit {}).",
			response.data.len(),
			response.meta.total,
			response.meta.page,
			response.meta.limit,
		));

		Self {
			view: DirectoryView::new(response.data),
			meta: Some(response.meta),
			status: Some(status),
			..Default::default()
		}
	}

	pub fn failed(message: impl Into<String>) -> Self {
		Self { status: Some(Status::Error(message.into())), ..Default::default() }
	}

	/// Specialties of the highlighted row.
	pub fn selected_tags(&self) -> &[String] {
		self.view
			.displayed()
			.get(self.selected_row)
			.map(|advocate| advocate.specialties.as_slice())
			.unwrap_or_default()
	}

	pub fn selected_tag_value(&self) -> Option<&str> {
		self.selected_tags().get(self.selected_tag).map(String::as_str)
	}

	pub fn apply(&mut self, action: Action) {
		match action {
			Action::Quit => self.should_quit = true,
			Action::Type(c) => {
				self.search_input.push(c);
				self.view.filter(&self.search_input);
				self.reset_cursor();
			},
			Action::Backspace => {
				if self.search_input.pop().is_some() {
					self.view.filter(&self.search_input);
					self.reset_cursor();
				}
			},
			Action::Reset => {
				self.search_input.clear();
				self.view.reset();
				self.reset_cursor();
			},
			Action::MoveUp => {
				self.selected_row = self.selected_row.saturating_sub(1);
				self.selected_tag = 0;
			},
			Action::MoveDown => {
				if self.selected_row + 1 < self.view.displayed().len() {
					self.selected_row += 1;
					self.selected_tag = 0;
				}
			},
			Action::PrevTag => self.selected_tag = self.selected_tag.saturating_sub(1),
			Action::NextTag =>
				if self.selected_tag + 1 < self.selected_tags().len() {
					self.selected_tag += 1;
				},
			Action::ApplyTag =>
				if let Some(tag) = self.selected_tag_value().map(str::to_string) {
					self.view.click_tag(&tag);
					self.search_input = tag;
					self.reset_cursor();
				},
			Action::Sort(key) => {
				self.view.sort(key);
				self.reset_cursor();
			},
		}
	}

	fn reset_cursor(&mut self) {
		self.selected_row = 0;
		self.selected_tag = 0;
	}
}
