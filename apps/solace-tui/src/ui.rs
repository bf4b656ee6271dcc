use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::{App, Status};
use solace_view::{DisplayRow, SortKey};

const HELP: &str =
	"Type to search · Esc reset · ↑↓ row · ←→ tag · Enter apply tag · F1-F6 sort · Ctrl-C quit";

pub fn render(f: &mut Frame<'_>, app: &App) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Min(5),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.split(f.size());

	render_search(f, app, chunks[0]);
	render_table(f, app, chunks[1]);
	render_status(f, app, chunks[2]);
	f.render_widget(Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)), chunks[3]);
}

fn render_search(f: &mut Frame<'_>, app: &App, area: Rect) {
	let title = match app.view.search_term() {
		"" => "Search".to_string(),
		term => format!("Searching for: {term}"),
	};
	let search = Paragraph::new(app.search_input.as_str())
		.block(Block::default().title(title).borders(Borders::ALL));

	f.render_widget(search, area);
}

fn render_table(f: &mut Frame<'_>, app: &App, area: Rect) {
	let sort = app.view.sort_config();
	let mut header: Vec<Cell> = Vec::with_capacity(SortKey::ALL.len() + 1);

	for (index, key) in SortKey::ALL.into_iter().enumerate() {
		let arrow = match sort {
			Some(config) if config.key == key => config.direction.arrow(),
			_ => "",
		};

		header.push(Cell::from(format!("F{} {}{arrow}", index + 1, key.label())));

		if key == SortKey::Degree {
			header.push(Cell::from("Specialties"));
		}
	}

	let rows = app.view.rows().into_iter().enumerate().map(|(index, row)| {
		let tag = (index == app.selected_row).then_some(app.selected_tag);

		table_row(row, tag)
	});
	let widths = [
		Constraint::Percentage(11),
		Constraint::Percentage(11),
		Constraint::Percentage(12),
		Constraint::Percentage(8),
		Constraint::Percentage(32),
		Constraint::Percentage(12),
		Constraint::Percentage(14),
	];
	let table = Table::new(rows, widths)
		.header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
		.block(Block::default().title("Solace Advocates").borders(Borders::ALL))
		.highlight_style(Style::default().bg(Color::DarkGray));
	let mut state = TableState::default();

	if !app.view.displayed().is_empty() {
		state.select(Some(app.selected_row));
	}

	f.render_stateful_widget(table, area, &mut state);
}

fn table_row(row: DisplayRow, selected_tag: Option<usize>) -> Row<'static> {
	let mut tags = Vec::with_capacity(row.specialties.len() * 2);

	for (index, specialty) in row.specialties.into_iter().enumerate() {
		if index > 0 {
			tags.push(Span::raw(" "));
		}

		let style = if selected_tag == Some(index) {
			Style::default().fg(Color::Black).bg(Color::Cyan)
		} else {
			Style::default().fg(Color::Cyan)
		};

		tags.push(Span::styled(format!("[{specialty}]"), style));
	}

	Row::new(vec![
		Cell::from(row.first_name),
		Cell::from(row.last_name),
		Cell::from(row.city),
		Cell::from(row.degree),
		Cell::from(Line::from(tags)),
		Cell::from(row.years_of_experience),
		Cell::from(row.phone_number),
	])
}

fn render_status(f: &mut Frame<'_>, app: &App, area: Rect) {
	let (message, color) = match &app.status {
		Some(Status::Info(message)) => (message.as_str(), Color::Green),
		Some(Status::Error(message)) => (message.as_str(), Color::Red),
		None => ("", Color::Reset),
	};

	f.render_widget(Paragraph::new(Span::styled(message, Style::default().fg(color))), area);
}
