use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Profile to load settings from
    #[arg(short, long, value_name = "PROFILE", global = true)]
    pub profile: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look a word up in the online dictionaries
    Lookup {
        #[arg(value_name = "WORD")]
        word: String,

        /// Dictionary to query, repeatable (default: all configured)
        #[arg(short, long = "source", value_name = "ID")]
        sources: Vec<String>,

        /// Examples shown per definition, 0 hides them
        #[arg(short = 'n', long, value_name = "N")]
        max_examples: Option<usize>,

        /// Print notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available dictionaries with their display names
    Sources,

    /// Manage stored profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileAction {
    /// Create the profile directory and the main profile
    Init,

    /// Add a profile cloned from main
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },
}
