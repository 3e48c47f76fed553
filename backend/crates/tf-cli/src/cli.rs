use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tf")]
#[command(about = "TaskFlow board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to the server's default bind address)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// User ID sent as X-User-Id when the server runs without auth
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// JWT sent as a Bearer token when the server requires auth
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// The explicit `--server`, or the address a default-configured server binds to.
    pub fn server_url(&self) -> String {
        match self.server {
            Some(ref url) => url.clone(),
            None => {
                let defaults = tf_config::ServerConfig::default();
                format!("http://{}:{}", defaults.host, defaults.port)
            }
        }
    }
}
