//! tf - TaskFlow board CLI
//!
//! Prints the server's JSON response on success.
//!
//! # Examples
//!
//! ```bash
//! # List your projects
//! tf project list --pretty
//!
//! # Create a task in a column
//! tf task create --project-id <uuid> --column-id <uuid> --title "Write docs"
//!
//! # Move it to the top of another column
//! tf column move-task --task-id <uuid> --from <uuid> --to <uuid> --index 0
//! ```

use tf_cli::{Cli, Client};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client =
        Client::new(&cli.server_url(), cli.user_id.as_deref()).with_token(cli.token.as_deref());

    let result = cli.command.execute(&client).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
