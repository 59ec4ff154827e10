use crate::resource_commands::ResourceCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account (log in separately afterwards)
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Print the bearer token of the current session
    Token,

    /// Dating techniques
    Techniques {
        #[command(subcommand)]
        action: ResourceCommands,
    },

    /// Common mistakes
    Mistakes {
        #[command(subcommand)]
        action: ResourceCommands,
    },

    /// Solutions to mistakes
    Solutions {
        #[command(subcommand)]
        action: ResourceCommands,
    },

    /// Videos
    Videos {
        #[command(subcommand)]
        action: ResourceCommands,
    },

    /// Chat screenshots
    Screenshots {
        #[command(subcommand)]
        action: ResourceCommands,
    },
}
