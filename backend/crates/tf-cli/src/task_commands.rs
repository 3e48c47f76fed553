use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks across your projects
    List,

    /// Get a task by ID
    Get {
        /// Task ID (UUID)
        id: String,
    },

    /// Create a task at the end of a column
    Create {
        /// Project ID (UUID)
        #[arg(long)]
        project_id: String,

        /// Column ID (UUID) on the project's board
        #[arg(long)]
        column_id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// low, medium or high (default: medium)
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,
    },

    /// Update a task
    Update {
        /// Task ID (UUID)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// Assignee user ID (UUID, or empty to unassign)
        #[arg(long)]
        assignee_id: Option<String>,
    },

    /// Move a task to the column matching a status
    Status {
        /// Task ID (UUID)
        id: String,

        #[arg(value_parser = ["todo", "in-progress", "completed"])]
        status: String,
    },

    /// Delete a task
    Delete {
        /// Task ID (UUID)
        id: String,
    },
}
