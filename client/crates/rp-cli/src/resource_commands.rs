use clap::Subcommand;

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// List all items
    List,

    /// Create an item (requires login)
    Create {
        /// Item fields as a JSON object
        #[arg(long)]
        data: String,
    },

    /// Replace an item's fields (requires login)
    Update {
        /// Item ID
        id: String,

        /// Item fields as a JSON object
        #[arg(long)]
        data: String,
    },

    /// Delete an item (requires login)
    Delete {
        /// Item ID
        id: String,
    },
}
