use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbox_catalog::Catalog;

use crate::CliError;

/// List registered users with the size of each collection.
pub(crate) fn run_users(catalog: Catalog<'_>) -> Result<(), CliError> {
    let users = catalog.users()?;
    if users.is_empty() {
        log::info!("No users yet. Start reelbox without a command to create one.");
        return Ok(());
    }

    for user in users {
        let count = catalog.movies(user.id)?.len();
        log::info!(
            "{:>4}  {} {}",
            user.id,
            user.name.if_supports_color(Stdout, |t| t.bold()),
            format!("({count} movies)").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
