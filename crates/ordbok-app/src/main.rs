use clap::Parser;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod profile;

use self::cli::{Args, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let (config, fallback_from) = match args.profile.as_deref() {
        Some(name) => {
            let loaded = profile::load_user_profile(&profile::ordbok_root()?, name)?;
            (loaded.config, loaded.fell_back.then_some(name))
        }
        None => (ordbok_config::Config::new(), None),
    };

    logging::init(args.verbose, config.log_json);
    if let Some(name) = fallback_from {
        tracing::warn!("Profile {name} not found, falling back to main profile or environment");
    }

    match args.command {
        Command::Lookup {
            word,
            sources,
            max_examples,
            json,
        } => commands::handle_lookup(&config, &word, sources, max_examples, json).await,
        Command::Sources => commands::handle_sources(&config).await,
        Command::Profile { action } => commands::handle_profile(action),
    }
}
