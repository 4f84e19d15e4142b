//! Booklet CLI - weekly training progress in the terminal.

mod render;

use std::path::PathBuf;

use anyhow::Result;
use booklet_core::{find_category, week_key, AnswerState, Clock, QUESTIONS_PER_CATEGORY};
use booklet_progress::{ProgressTracker, TrackerError};
use booklet_storage::{JsonStorage, ProfileStore};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "booklet")]
#[command(about = "Weekly training booklet", long_about = None)]
struct Cli {
    /// Directory holding the profile
    #[arg(long, global = true, env = "BOOKLET_DATA_DIR", default_value = ".booklet")]
    data_dir: PathBuf,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "BOOKLET_TODAY")]
    today: Option<NaiveDate>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the category list
    Home,
    /// Show a category's questions
    Show {
        /// Category ID
        id: String,
    },
    /// Answer one question
    Answer {
        /// Category ID
        id: String,
        /// Question number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=QUESTIONS_PER_CATEGORY as i64))]
        question: u8,
        /// got-it, not-yet or unset
        answer: AnswerState,
    },
    /// Record this week's completion
    Complete {
        /// Category ID
        id: String,
    },
    /// Edit store and user names
    Profile {
        /// Store name
        #[arg(long)]
        store: Option<String>,
        /// Your name
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the week key for a date
    Week {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let clock = match cli.today {
        Some(date) => Clock::fixed(date),
        None => Clock::System,
    };

    debug!("Using data directory {}", cli.data_dir.display());
    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut tracker = ProgressTracker::open(storage, clock).await?;

    match cli.command.unwrap_or(Commands::Home) {
        Commands::Home => {
            print!("{}", render::home(&tracker.home_screen()));
        }
        Commands::Show { id } => match tracker.category_screen(&id) {
            Ok(screen) => print!("{}", render::category(&screen)),
            Err(e) => print!("{}", back_home(&tracker, e)?),
        },
        Commands::Answer { id, question, answer } => {
            match tracker.set_answer(&id, usize::from(question) - 1, answer).await {
                Ok(()) => print!("{}", render::category(&tracker.category_screen(&id)?)),
                Err(e) => print!("{}", back_home(&tracker, e)?),
            }
        }
        Commands::Complete { id } => match tracker.complete_week(&id).await {
            Ok(report) => {
                let title = find_category(tracker.catalog(), &id)
                    .map_or(id.as_str(), |c| c.title);
                println!("{}", render::completion(title, &report));
                println!();
                print!("{}", render::home(&tracker.home_screen()));
            }
            Err(e) => print!("{}", back_home(&tracker, e)?),
        },
        Commands::Profile { store, name } => {
            if let Some(store) = store {
                tracker.set_store_name(store).await?;
            }
            if let Some(name) = name {
                tracker.set_user_name(name).await?;
            }
            print!("{}", render::home(&tracker.home_screen()));
        }
        Commands::Week { date } => {
            println!("{}", week_key(date.unwrap_or_else(|| tracker.today())));
        }
    }

    Ok(())
}

/// Navigation to a missing or locked category falls back to the home list,
/// returned as rendered text. Storage failures still abort.
fn back_home<S: ProfileStore>(tracker: &ProgressTracker<S>, err: TrackerError) -> Result<String> {
    match err {
        TrackerError::Storage(_) => Err(err.into()),
        other => {
            warn!("{}", other);
            eprintln!("{}", other);
            Ok(render::home(&tracker.home_screen()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booklet_storage::{MemoryStorage, StorageError};

    async fn tracker() -> ProgressTracker<MemoryStorage> {
        let today = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
        ProgressTracker::open(MemoryStorage::new(), Clock::fixed(today))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_locked_category_shows_home() {
        let tracker = tracker().await;
        let err = tracker.category_screen("courtesy").unwrap_err();

        let text = back_home(&tracker, err).unwrap();
        assert_eq!(text, render::home(&tracker.home_screen()));
        assert!(text.contains("Courtesy [locked]"));
    }

    #[tokio::test]
    async fn test_unknown_category_shows_home() {
        let mut tracker = tracker().await;
        let err = tracker
            .set_answer("nope", 0, AnswerState::Understood)
            .await
            .unwrap_err();

        let text = back_home(&tracker, err).unwrap();
        assert!(text.contains("Culture (culture)"));
    }

    #[tokio::test]
    async fn test_storage_error_aborts() {
        let tracker = tracker().await;
        let err = TrackerError::Storage(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )));

        assert!(back_home(&tracker, err).is_err());
    }

    #[tokio::test]
    async fn test_garbage_profile_opens_fresh() {
        let storage = MemoryStorage::with_blob("{not json");
        let today = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
        let tracker = ProgressTracker::open(storage, Clock::fixed(today)).await.unwrap();

        let home = tracker.home_screen();
        assert_eq!(home.rows.len(), 2);
        assert_eq!(home.rows[0].category.id, "culture");
    }
}
