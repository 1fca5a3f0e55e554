/// Main entry point for the habit tracker CLI
///
/// This file sets up logging, parses command line arguments, resolves the
/// database location and dispatches to the command implementations.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use habit_tracker::commands::{
    analyze_habits, change_periodicity, check_off_habit, create_habit, create_user, delete_habit,
    list_habits, list_users, rename_habit, AnalyzeParams, CheckOffParams, CreateHabitParams,
    ListHabitsParams,
};
use habit_tracker::{AppError, Periodicity, SqliteStore};

/// Get the default database path with a fallback strategy
fn default_database_path() -> Result<PathBuf, std::io::Error> {
    let potential_dirs = [
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("habit_tracker");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for dir in potential_dirs.into_iter().flatten() {
        if std::fs::create_dir_all(&dir).is_ok() {
            let mut db_path = dir;
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no writable location for the habit database",
    ))
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new user
    AddUser { name: String },

    /// List all users
    Users,

    /// Create a new habit for a user
    AddHabit {
        #[arg(long)]
        user: String,
        name: String,
        #[arg(long)]
        periodicity: Periodicity,
    },

    /// List a user's tracked habits
    Habits {
        #[arg(long)]
        user: String,
        #[arg(long)]
        periodicity: Option<Periodicity>,
    },

    /// Check off a habit (record a completion)
    CheckOff {
        #[arg(long)]
        user: String,
        habit: String,
        /// Date the habit was done on (YYYY-MM-DD); defaults to today,
        /// future dates are rejected
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Rename a habit
    Rename {
        #[arg(long)]
        user: String,
        habit: String,
        new_name: String,
    },

    /// Change a habit's periodicity
    SetPeriodicity {
        #[arg(long)]
        user: String,
        habit: String,
        periodicity: Periodicity,
    },

    /// Delete a habit and its completion history
    Remove {
        #[arg(long)]
        user: String,
        habit: String,
    },

    /// Show streak, break and completion-rate statistics
    Analyze {
        #[arg(long)]
        user: String,
        /// Analyze a single habit instead of all habits with data
        habit: Option<String>,
        /// Print the raw report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Print either the human message or the JSON form of a response
fn emit<T: Serialize>(response: &T, message: &str, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", message);
    }
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());
    let store = SqliteStore::new(db_path)?;

    let now = Utc::now();
    let today = Local::now().date_naive();

    match args.command {
        Command::AddUser { name } => {
            let response = create_user(&store, &name)?;
            println!("{}", response.message);
        }
        Command::Users => {
            let response = list_users(&store)?;
            println!("{}", response.message);
        }
        Command::AddHabit {
            user,
            name,
            periodicity,
        } => {
            let response = create_habit(
                &store,
                CreateHabitParams {
                    user_name: &user,
                    habit_name: &name,
                    periodicity,
                    now,
                },
            )?;
            println!("{}", response.message);
        }
        Command::Habits { user, periodicity } => {
            let response = list_habits(
                &store,
                ListHabitsParams {
                    user_name: &user,
                    periodicity,
                },
            )?;
            println!("{}", response.message);
        }
        Command::CheckOff { user, habit, date } => {
            let response = check_off_habit(
                &store,
                CheckOffParams {
                    user_name: &user,
                    habit_name: &habit,
                    date,
                    now,
                    today,
                },
            )?;
            println!("{}", response.message);
        }
        Command::Rename {
            user,
            habit,
            new_name,
        } => {
            let response = rename_habit(&store, &user, &habit, &new_name)?;
            println!("{}", response.message);
        }
        Command::SetPeriodicity {
            user,
            habit,
            periodicity,
        } => {
            let response = change_periodicity(&store, &user, &habit, periodicity)?;
            println!("{}", response.message);
        }
        Command::Remove { user, habit } => {
            let response = delete_habit(&store, &user, &habit)?;
            println!("{}", response.message);
        }
        Command::Analyze { user, habit, json } => {
            let response = analyze_habits(
                &store,
                AnalyzeParams {
                    user_name: &user,
                    habit_name: habit.as_deref(),
                    today,
                },
            )?;
            emit(&response, &response.message, json)?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // logs go to stderr, output to stdout
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
