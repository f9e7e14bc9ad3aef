mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{admin::AdminCommand, session::SessionCommand, student::StudentCommand};

#[derive(Parser, Debug)]
#[command(
    name = "classdesk",
    version,
    about = "Homework, exam and timetable tracker for school classes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the locally cached session.
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Forget the cached session.
    Logout,

    /// Student accounts and class timetables.
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },

    /// Homework, exams and notices for your class.
    Student {
        #[command(subcommand)]
        command: StudentCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "classdesk=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Session { command } => commands::session::run(command),
        Commands::Logout => commands::session::logout(),
        Commands::Admin { command } => commands::admin::run(command).await,
        Commands::Student { command } => commands::student::run(command).await,
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
