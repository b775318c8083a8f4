use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use ordbok_config::Config;
use serde::{Deserialize, Serialize};

/// `$ORDBOK_HOME`, or the platform config directory
pub fn ordbok_root() -> anyhow::Result<PathBuf> {
    if let Ok(home) = env::var("ORDBOK_HOME") {
        return Ok(PathBuf::from(home));
    }

    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("ordbok"))
}

fn profiles_dir(root: &Path) -> PathBuf {
    root.join("profiles")
}

/// Profile names are bare file stems inside the profiles folder
fn check_profile_name(name: &str) -> anyhow::Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\'])
        || Path::new(name).is_absolute();
    if invalid {
        anyhow::bail!("Invalid profile name '{name}'");
    }
    Ok(())
}

fn profile_path(root: &Path, name: &str) -> PathBuf {
    profiles_dir(root).join(format!("{name}.json"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

fn write_profile(path: &Path, profile: &Profile) -> anyhow::Result<()> {
    fs::write(path, serde_json::to_string_pretty(profile)?)
        .with_context(|| format!("Failed to write profile {}", path.display()))
}

/// Initialize profile folder and main profile if missing
pub fn init_user_config(root: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir(root))?;

    let main_profile = profile_path(root, "main");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        write_profile(&main_profile, &profile)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(main_profile)
}

/// Config loaded for a profile name
pub struct LoadedProfile {
    pub config: Config,
    /// The named profile was missing and main or the environment was used
    pub fell_back: bool,
}

/// Load a user profile by name, defaulting to main if name not found.
///
/// Runs before logging is set up, so a fallback is reported to the caller
/// instead of logged.
pub fn load_user_profile(root: &Path, name: &str) -> anyhow::Result<LoadedProfile> {
    check_profile_name(name)?;
    let profile_file = profile_path(root, name);

    if profile_file.exists() {
        return Ok(LoadedProfile {
            config: read_profile(&profile_file)?,
            fell_back: false,
        });
    }

    let main_file = profile_path(root, "main");
    let config = if main_file.exists() {
        read_profile(&main_file)?
    } else {
        Config::new()
    };

    Ok(LoadedProfile {
        config,
        fell_back: true,
    })
}

/// Add a new profile cloned from main (or the environment defaults if main is missing)
pub fn add_profile_from_default(root: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    check_profile_name(new_name)?;
    fs::create_dir_all(profiles_dir(root))?;

    let file = profile_path(root, new_name);
    if file.exists() {
        anyhow::bail!("Profile {new_name} already exists at {}", file.display());
    }

    let profile = Profile {
        name: new_name.into(),
        value: load_user_profile(root, "main")?.config,
    };
    write_profile(&file, &profile)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}
