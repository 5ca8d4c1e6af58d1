use clap::Parser;
use leadsync_client::cli::utils::output_error;
use leadsync_client::cli::{Cli, OutputFormat};
use leadsync_client::error::LeadStatusError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = leadsync_client::cli::run(cli).await {
        let error_code = e.downcast_ref::<LeadStatusError>().map(LeadStatusError::error_code);
        match (&output_format, std::env::var("CLI_VERBOSE").as_deref()) {
            (OutputFormat::Json, _) => output_error(&output_format, &e.to_string(), error_code)?,
            (_, Ok("true")) | (_, Ok("1")) => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
