//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use solace_view::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Quit,
	Type(char),
	Backspace,
	Reset,
	MoveUp,
	MoveDown,
	PrevTag,
	NextTag,
	ApplyTag,
	Sort(SortKey),
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
	let KeyEvent { code, modifiers, kind, .. } = event;

	if kind == KeyEventKind::Release {
		return None;
	}
	if modifiers.contains(KeyModifiers::CONTROL) {
		return match code {
			KeyCode::Char('c') => Some(Action::Quit),
			_ => None,
		};
	}

	match code {
		KeyCode::Esc => Some(Action::Reset),
		KeyCode::Backspace => Some(Action::Backspace),
		KeyCode::Enter => Some(Action::ApplyTag),
		KeyCode::Up => Some(Action::MoveUp),
		KeyCode::Down => Some(Action::MoveDown),
		KeyCode::Left => Some(Action::PrevTag),
		KeyCode::Right => Some(Action::NextTag),
		KeyCode::F(n) => SortKey::ALL.get(usize::from(n).checked_sub(1)?).copied().map(Action::Sort),
		KeyCode::Char(c) if !modifiers.contains(KeyModifiers::ALT) => Some(Action::Type(c)),
		_ => None,
	}
}
