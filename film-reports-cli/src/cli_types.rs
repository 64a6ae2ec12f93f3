//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use film_reports_db::{
    ReportDef, AVG_AMOUNT_BY_LENGTH, CATEGORY_STATISTIC_LENGTH, CLIENT_BY_SUM_LENGTH,
    CLIENT_FROM_CITY, FILM_CAST, FILM_IN_CATEGORY, FILM_IN_CATEGORY_CASE_INSENSITIVE,
    FILM_TITLE_CASE_INSENSITIVE, NUMBER_FILMS_IN_CATEGORY, NUMBER_FILM_BY_LENGTH,
};
use film_reports_model::Arg;

#[derive(Parser)]
#[command(name = "film-reports")]
#[command(about = "Run reports against a film-rental database", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides $FILM_REPORTS_DB and the settings file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format for report results
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned columns with a header
    Table,
    /// JSON array of row objects
    Json,
    /// CSV with a header row
    Csv,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the database and its schema
    Init,

    /// Load a YAML dataset (file or directory) into the database
    Seed {
        /// Dataset file, or a directory of .yaml files
        path: PathBuf,
    },

    /// List every report and its parameters
    Reports,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    #[command(flatten)]
    Report(ReportCommand),
}

/// Options shared by every report command.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ReportOptions {
    /// Print the SQL and bound values before running
    #[arg(long)]
    pub show_sql: bool,
}

#[derive(Subcommand)]
pub(crate) enum ReportCommand {
    /// Films in a category, by category id or exact category name
    FilmInCategory {
        /// Category id (e.g. 1) or name (e.g. Action)
        category: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Number of films in a category
    FilmsInCategory {
        /// Category id
        #[arg(allow_negative_numbers = true)]
        category_id: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Number of films for each length in a range
    FilmsByLength {
        /// Shortest length to include, in minutes
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: String,

        /// Longest length to include, in minutes
        #[arg(long, default_value = "1000000", allow_negative_numbers = true)]
        max: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Customers living in a city
    ClientsInCity {
        /// Exact city name
        city: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Average payment for films of one length
    AvgAmount {
        /// Film length in minutes
        #[arg(allow_negative_numbers = true)]
        length: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Customers whose rented films add up to more than a number of minutes
    ClientsBySum {
        /// Minimum total length, exclusive
        #[arg(allow_negative_numbers = true)]
        min_sum: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Length statistics for a category
    CategoryStats {
        /// Exact category name
        name: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Films in a category, matching the name case-insensitively
    FilmInCategoryCi {
        /// Category id or name
        category: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Cast of a film
    FilmCast {
        /// Exact film title
        title: String,

        #[command(flatten)]
        opts: ReportOptions,
    },

    /// Titles containing any of the given words
    FilmTitle {
        /// Words to search for
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        opts: ReportOptions,
    },
}

/// A report command resolved to its definition and arguments.
pub(crate) struct Invocation<'a> {
    pub report: &'static ReportDef,
    pub args: Vec<Arg>,
    pub opts: &'a ReportOptions,
}

impl ReportCommand {
    /// Map the parsed command onto its report.
    ///
    /// Numeric positions go through [`Arg::from_literal`] so that a
    /// malformed number reaches the report as text and is rejected there.
    /// Name positions are always text.
    pub(crate) fn invocation(&self) -> Invocation<'_> {
        let (report, args, opts) = match self {
            Self::FilmInCategory { category, opts } => {
                (&FILM_IN_CATEGORY, vec![Arg::from_literal(category)], opts)
            }
            Self::FilmsInCategory { category_id, opts } => (
                &NUMBER_FILMS_IN_CATEGORY,
                vec![Arg::from_literal(category_id)],
                opts,
            ),
            Self::FilmsByLength { min, max, opts } => (
                &NUMBER_FILM_BY_LENGTH,
                vec![Arg::from_literal(min), Arg::from_literal(max)],
                opts,
            ),
            Self::ClientsInCity { city, opts } => {
                (&CLIENT_FROM_CITY, vec![Arg::Text(city.clone())], opts)
            }
            Self::AvgAmount { length, opts } => {
                (&AVG_AMOUNT_BY_LENGTH, vec![Arg::from_literal(length)], opts)
            }
            Self::ClientsBySum { min_sum, opts } => {
                (&CLIENT_BY_SUM_LENGTH, vec![Arg::from_literal(min_sum)], opts)
            }
            Self::CategoryStats { name, opts } => (
                &CATEGORY_STATISTIC_LENGTH,
                vec![Arg::Text(name.clone())],
                opts,
            ),
            Self::FilmInCategoryCi { category, opts } => (
                &FILM_IN_CATEGORY_CASE_INSENSITIVE,
                vec![Arg::from_literal(category)],
                opts,
            ),
            Self::FilmCast { title, opts } => (&FILM_CAST, vec![Arg::Text(title.clone())], opts),
            Self::FilmTitle { words, opts } => (
                &FILM_TITLE_CASE_INSENSITIVE,
                vec![Arg::List(words.iter().cloned().map(Arg::Text).collect())],
                opts,
            ),
        };
        Invocation { report, args, opts }
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved database path
    Show,

    /// Print the settings file path
    Path,

    /// Save a database path to the settings file
    SetDb {
        /// Database file to use by default
        path: PathBuf,
    },

    /// Remove the saved database path
    ClearDb,
}
