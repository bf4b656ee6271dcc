pub mod app;
pub mod client;
pub mod input;
pub mod keys;
pub mod ui;

mod error;

pub use error::{Error, Result};

use std::{
	io::{self, Stdout},
	thread,
	time::Duration,
};

use clap::Parser;
use crossterm::{
	event::{self, KeyEvent},
	execute,
	terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::{app::App, client::ApiClient};
use solace_domain::ListRequest;

#[derive(Debug, Parser)]
#[command(
	version = solace_cli::VERSION,
	rename_all = "kebab",
	styles = solace_cli::styles(),
)]
pub struct Args {
	/// Base URL of the advocates API.
	#[arg(long, value_name = "URL", default_value = "http://127.0.0.1:3000")]
	pub api_base: String,
	/// Search term sent with the initial fetch.
	#[arg(long, value_name = "TERM")]
	pub search: Option<String>,
	#[arg(long, value_name = "N")]
	pub page: Option<String>,
	#[arg(long, value_name = "N")]
	pub limit: Option<String>,
}
impl Args {
	pub fn list_request(&self) -> ListRequest {
		ListRequest { search: self.search.clone(), page: self.page.clone(), limit: self.limit.clone() }
	}
}

/// Fetches one page, then runs the interactive loop until Ctrl-C.
pub async fn run(args: Args) -> color_eyre::Result<()> {
	let client = ApiClient::new(&args.api_base)?;
	let mut app = match client.list(&args.list_request()).await {
		Ok(response) => App::loaded(response),
		Err(err) => App::failed(format!("Failed to fetch {}: {err}", client.advocates_url())),
	};
	let mut terminal = setup_terminal()?;
	let _guard = TerminalGuard;
	let (key_tx, mut key_rx) = mpsc::channel::<KeyEvent>(64);

	spawn_input_reader(key_tx);

	while !app.should_quit {
		terminal.draw(|f| ui::render(f, &app))?;

		let Some(key) = key_rx.recv().await else {
			break;
		};

		if let Some(action) = keys::map_key(key) {
			app.apply(action);
		}
	}

	Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
	enable_raw_mode()?;

	let mut stdout = io::stdout();

	execute!(stdout, EnterAlternateScreen)?;

	Terminal::new(CrosstermBackend::new(stdout))
}

struct TerminalGuard;
impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
		let _ = execute!(io::stdout(), LeaveAlternateScreen);
	}
}

fn spawn_input_reader(sender: mpsc::Sender<KeyEvent>) {
	thread::spawn(move || {
		input::forward_keys(|| event::poll(Duration::from_millis(200)), event::read, &sender);
	});
}
