use crate::models::education::EducationLevel;
use crate::models::food::FoodItem;
use crate::models::transport::TransportMode;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for footprint
/// CLI application to estimate a student's daily CO₂ footprint with SQLite
#[derive(Parser)]
#[command(
    name = "footprint",
    version = env!("CARGO_PKG_VERSION"),
    about = "Student energy footprint calculator: estimate daily CO₂ emissions and store each submission in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, statistics, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Calculate the daily carbon footprint and store the result
    Calc(CalcArgs),

    /// Write the synthetic training dataset (CSV)
    Dataset {
        #[arg(long, value_name = "FILE", default_value = "students.csv")]
        file: String,
    },

    /// Fit a linear regression on the dataset and save it (JSON)
    Train {
        #[arg(long, value_name = "FILE", default_value = "students.csv")]
        data: String,

        #[arg(long, value_name = "FILE", default_value = "co2_model.json")]
        model: String,
    },
}

/// The calculator form. Slider bounds are enforced here.
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Student name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Current level of study
    #[arg(long, value_enum, default_value = "school-primary")]
    pub education: EducationLevel,

    /// City
    #[arg(long, default_value = "")]
    pub city: String,

    /// Type of transport used for commute
    #[arg(long, value_enum, default_value = "public")]
    pub transport: TransportMode,

    /// Daily commuting distance (km)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub distance: u8,

    /// Breakfast was consumed; optional comma-separated food items
    #[arg(long, value_enum, num_args = 0.., value_delimiter = ',', value_name = "ITEMS")]
    pub breakfast: Option<Vec<FoodItem>>,

    /// Mostly organic food for breakfast
    #[arg(long)]
    pub breakfast_organic: bool,

    /// Lunch was consumed; optional comma-separated food items
    #[arg(long, value_enum, num_args = 0.., value_delimiter = ',', value_name = "ITEMS")]
    pub lunch: Option<Vec<FoodItem>>,

    /// Mostly organic food for lunch
    #[arg(long)]
    pub lunch_organic: bool,

    /// Dinner was consumed; optional comma-separated food items
    #[arg(long, value_enum, num_args = 0.., value_delimiter = ',', value_name = "ITEMS")]
    pub dinner: Option<Vec<FoodItem>>,

    /// Mostly organic food for dinner
    #[arg(long)]
    pub dinner_organic: bool,

    /// Snacks were consumed; optional comma-separated food items
    #[arg(long, value_enum, num_args = 0.., value_delimiter = ',', value_name = "ITEMS")]
    pub snacks: Option<Vec<FoodItem>>,

    /// Mostly organic food for snacks
    #[arg(long)]
    pub snacks_organic: bool,

    /// Laptop usage (hours/day)
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=24))]
    pub laptop: u8,

    /// Mobile usage (hours/day)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=24))]
    pub mobile: u8,

    /// AI usage (hours/day); omit if you do not use AI tools
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub ai_hours: Option<u8>,
}
