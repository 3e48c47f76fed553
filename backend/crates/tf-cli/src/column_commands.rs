use clap::Subcommand;

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// Place a task at a position in a column
    MoveTask {
        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,

        /// Column the task is in now (UUID)
        #[arg(long)]
        from: String,

        /// Column to place it in (UUID); same as --from to reorder
        #[arg(long)]
        to: String,

        /// Zero-based position; past the end appends
        #[arg(long, allow_negative_numbers = true)]
        index: i64,
    },
}
