use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbox_omdb::{ApiKey, KeySource};

use crate::CliError;

/// Show the API key in effect and where it comes from.
///
/// `explicit` is the `--api-key` flag, which beats every other source.
pub(crate) fn run_config_show(explicit: Option<&str>) -> Result<(), CliError> {
    let key = match explicit {
        Some(value) => Some(ApiKey::new(value)),
        None => ApiKey::load().ok(),
    };

    log::info!(
        "{}",
        "OMDb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  config: {}",
        config_file_line(reelbox_omdb::config_path().as_deref())
    );
    log::info!("  key:    {}", key_line(key.as_ref()));
    Ok(())
}

/// `<path> (exists)`, `<path> (not found)` or a note that there is no path.
fn config_file_line(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return "no config directory on this platform"
            .if_supports_color(Stdout, |t| t.red())
            .to_string();
    };
    let state = if path.exists() { "in use" } else { "not created yet" };
    format!(
        "{} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("[{state}]").if_supports_color(Stdout, |t| t.dimmed()),
    )
}

/// The masked key and its source, or "not set".
fn key_line(key: Option<&ApiKey>) -> String {
    match key {
        Some(key) => format!(
            "{} {}",
            key.masked(),
            format!("from {}", key.source()).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => format!(
            "{} {}",
            "not set".if_supports_color(Stdout, |t| t.yellow()),
            format!(
                "(set ${} or run 'reelbox config set-key <KEY>')",
                reelbox_omdb::API_KEY_ENV
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}

/// Save `key` to the config file.
pub(crate) fn run_config_set_key(key: &str) -> Result<(), CliError> {
    if key.trim().is_empty() {
        return Err(CliError::config("API key cannot be empty"));
    }

    let path = reelbox_omdb::save_to_file(key)?;
    log::info!(
        "{} API key saved to {}",
        "OK".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );

    if let KeySource::EnvVar(var) = reelbox_omdb::key_source() {
        log::warn!("${var} is set and takes precedence over the config file");
    }
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = reelbox_omdb::config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}
