use clap::Subcommand;
use serde_json::json;

use crate::cli::config::{load_server_config, resolve_base_url, save_server_config, ServerConfig};
use crate::cli::utils::{output_current_item, output_success};
use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    #[command(about = "Save the server used by lead commands")]
    Set {
        #[arg(help = "Server URL")]
        url: String,
    },

    #[command(about = "Show the server lead commands will use")]
    Show,
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Set { url } => {
            let server = ServerConfig::new(&url)?;
            save_server_config(&server)?;
            tracing::info!(url = %server.url, "Saved server");

            output_success(
                &output_format,
                &format!("Server set to {}", server.url),
                Some(json!({ "server": server })),
            )
        }
        ServerCommands::Show => {
            let saved = load_server_config()?;
            let (url, source) = resolve_base_url(None, saved.as_ref(), config::config());

            let mut details = json!({
                "url": url,
                "source": source.as_str(),
            });
            if let Some(saved) = saved {
                details["added_at"] = json!(saved.added_at);
            }

            output_current_item(&output_format, "server", &url, details)
        }
    }
}
