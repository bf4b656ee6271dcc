use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = solace_tui::Args::parse();
	solace_tui::run(args).await
}
