use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = solace_api::Args::parse();
	solace_api::run(args).await
}
