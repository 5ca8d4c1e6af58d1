use clap::Subcommand;
use serde_json::json;

use crate::cli::config::{load_server_config, resolve_base_url};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::leads::{LeadStatus, LeadStatusUpdater};

#[derive(Subcommand, Debug)]
pub enum LeadCommands {
    #[command(about = "Update a lead's pipeline status")]
    Status {
        #[arg(help = "Lead ID")]
        lead_id: String,
        #[arg(help = "Target status, forwarded to the server as-is")]
        status: String,
        #[arg(long, env = "LEADSYNC_ACCESS_TOKEN", hide_env_values = true, help = "Bearer token")]
        token: String,
        #[arg(long, help = "Server URL (defaults to the saved server)")]
        server: Option<String>,
    },

    #[command(about = "List lead statuses known to the LeadSync backend")]
    Statuses,
}

pub async fn handle(cmd: LeadCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        LeadCommands::Status { lead_id, status, token, server } => {
            let app = config::config();
            let saved = match server {
                Some(_) => None,
                None => load_server_config()?,
            };
            let (base_url, source) = resolve_base_url(server.as_deref(), saved.as_ref(), app);
            tracing::debug!(%base_url, source = source.as_str(), "Resolved server");

            let updater = LeadStatusUpdater::new(&base_url)?
                .with_request_logging(app.api.enable_request_logging);
            let lead = updater.update_status(&lead_id, &status, &token).await?;

            output_success(
                &output_format,
                &format!("Lead {} status updated to {}", lead_id, status),
                Some(json!({ "lead": lead })),
            )
        }
        LeadCommands::Statuses => {
            match output_format {
                OutputFormat::Json => {
                    let statuses: Vec<_> = LeadStatus::ALL
                        .iter()
                        .map(|status| json!({
                            "status": status.as_str(),
                            "description": status.description(),
                        }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&json!({ "statuses": statuses }))?);
                }
                OutputFormat::Text => {
                    for status in LeadStatus::ALL {
                        println!("{:<16} {}", status.as_str(), status.description());
                    }
                }
            }
            Ok(())
        }
    }
}
