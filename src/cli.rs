use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// Macro dashboard: daily calorie and macro targets plus a post board.
#[derive(Parser, Debug)]
#[command(name = "macro_dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the TOML settings file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the posts JSON file.
    #[arg(long)]
    pub posts: Option<PathBuf>,

    /// Override the session file.
    #[arg(long)]
    pub session: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate daily calorie and macro targets.
    Calc(CalcArgs),

    /// Manage the post board.
    #[command(subcommand)]
    Posts(PostsCommand),

    /// Start a session with the given token.
    Login { token: String },

    /// End the current session.
    Logout,
}

/// Values left out are asked for interactively.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct CalcArgs {
    /// Height in inches.
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in pounds.
    #[arg(long)]
    pub weight: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<String>,

    /// Male or Female.
    #[arg(long)]
    pub sex: Option<String>,

    /// Gain, Lose or Maintain.
    #[arg(long)]
    pub goal: Option<String>,

    /// Sedentary, "Lightly Active", "Moderately Active", "Very Active" or "Extremely Active".
    #[arg(long)]
    pub activity: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    /// Show all posts.
    List,

    /// Add a post. Prompts for anything not given.
    Add {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        body: Option<String>,
    },

    /// Delete a post (requires login).
    Delete { id: u64 },

    /// Write the post table to a CSV file.
    Export { path: PathBuf },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc(CalcArgs::default())
    }
}
