use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List your projects with task counts
    List,
    /// Get a project with its team and tasks
    Get {
        /// Project ID (UUID)
        id: String,
    },
    /// Show the project's board, column by column
    Board {
        /// Project ID (UUID)
        id: String,
    },
    /// Create a project with a default board
    Create {
        /// Project name (at least 3 characters)
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// active, completed or on-hold
        #[arg(long, value_parser = ["active", "completed", "on-hold"])]
        status: Option<String>,
    },
    /// Delete a project and everything on its board
    Delete {
        /// Project ID (UUID)
        id: String,
    },
    /// Add a user to the project's team
    AddMember {
        /// Project ID (UUID)
        id: String,

        /// User ID (UUID)
        #[arg(long)]
        user_id: String,
    },
}
