use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_dash_rs::calculator::MacroCalculator;
use macro_dash_rs::cli::{CalcArgs, Cli, Command, PostsCommand};
use macro_dash_rs::config::Settings;
use macro_dash_rs::error::Result;
use macro_dash_rs::form::StepTracker;
use macro_dash_rs::interface::{
    collect_macro_inputs, display_posts, display_targets, prompt_yes_no, write_posts_csv,
    PromptDialog,
};
use macro_dash_rs::models::{MacroOutcome, PostDraft};
use macro_dash_rs::posts::{JsonPostStore, PostBoard, PresetDialog, SessionAuth};
use macro_dash_rs::Dashboard;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.with_overrides(cli.posts, cli.session);
    let command = cli.command.unwrap_or_default();

    let source = JsonPostStore::new(&settings.posts_file);
    let auth = SessionAuth::new(&settings.session_file);

    match command {
        Command::Login { token } => {
            auth.login(&token)?;
            println!("Logged in.");
            Ok(())
        }
        Command::Logout => {
            auth.logout()?;
            println!("Logged out.");
            Ok(())
        }
        command => {
            let mut dashboard = Dashboard::new(source, auth)?;
            dashboard.posts = dashboard.posts.with_dialog_config(settings.dialog_config());

            match command {
                Command::Calc(args) => cmd_calc(&mut dashboard.calculator, &args),
                Command::Posts(posts) => cmd_posts(&mut dashboard.posts, posts),
                Command::Login { .. } | Command::Logout => Ok(()),
            }
        }
    }
}

/// Collect inputs step by step and show the targets.
fn cmd_calc(calculator: &mut MacroCalculator, args: &CalcArgs) -> Result<()> {
    let mut tracker = StepTracker::new();
    let mut args = args.clone();

    loop {
        collect_macro_inputs(calculator, &mut tracker, &args)?;

        match calculator.calculate() {
            MacroOutcome::Complete(targets) => display_targets(&targets),
            MacroOutcome::Incomplete => {
                println!("Some inputs are missing; nothing was calculated.");
            }
        }

        if !prompt_yes_no("Calculate again?", false)? {
            return Ok(());
        }

        calculator.reset(&mut tracker);
        // Presets apply to the first run only.
        args = CalcArgs::default();
    }
}

/// Run a post board command. Deleting without a session fails with
/// "Login in Before" and leaves the posts untouched.
fn cmd_posts(
    board: &mut PostBoard<JsonPostStore, SessionAuth>,
    command: PostsCommand,
) -> Result<()> {
    match command {
        PostsCommand::List => {
            let rows = board.rows()?;
            display_posts(&rows);
        }
        PostsCommand::Add {
            title,
            category,
            body,
        } => {
            let added = match (title, category, body) {
                (Some(title), Some(category), Some(body)) => {
                    let draft = PostDraft::new(title, category, body);
                    board.add_post(&mut PresetDialog::new(draft))?
                }
                (title, category, body) => board.add_post(&mut PromptDialog {
                    title,
                    category,
                    body,
                })?,
            };

            match added {
                Some(post) => println!("Added post {} '{}'.", post.id, post.title),
                None => println!("Nothing added."),
            }
        }
        PostsCommand::Delete { id } => {
            board.delete_post(id)?;
            println!("Deleted post {}.", id);
        }
        PostsCommand::Export { path } => {
            let rows = board.rows()?;
            write_posts_csv(&rows, &path)?;
            println!("Wrote {} posts to {}.", rows.len(), path.display());
        }
    }

    Ok(())
}
