//! reelbox CLI
//!
//! Interactive movie collection manager with per-user collections,
//! OMDb lookups and a static website export.

mod cli_types;
mod commands;
mod console;
mod error;
mod logging;
mod menu;
mod session;
mod spinner;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use reelbox_catalog::Catalog;
use reelbox_db::Store;
use reelbox_omdb::{ApiKey, MetadataSource, OmdbClient};

use cli_types::{Cli, Commands, ConfigAction};
use console::Console;
pub(crate) use error::CliError;
use session::{Session, SiteOptions};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        None => run_interactive(&cli),
        Some(Commands::Users) => {
            let store = open_store(&cli)?;
            commands::users::run_users(Catalog::new(&store))
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.api_key.as_deref()),
            ConfigAction::SetKey { key } => commands::config::run_config_set_key(key),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

/// Database location: `--db`, else `<data dir>/reelbox/movies.db`.
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("reelbox"))
        .unwrap_or_else(|| PathBuf::from("data"))
        .join("movies.db")
}

fn open_store(cli: &Cli) -> Result<Store, CliError> {
    let path = cli.db.clone().unwrap_or_else(default_db_path);
    log::debug!("Using database {}", path.display());
    Ok(Store::open(&path)?)
}

/// Build the OMDb client, or `None` when adding is manual or no key is set.
fn build_fetcher(cli: &Cli) -> Option<OmdbClient> {
    if cli.manual {
        return None;
    }

    let key = match &cli.api_key {
        Some(value) => ApiKey::new(value.as_str()),
        None => match ApiKey::load() {
            Ok(key) => key,
            Err(e) => {
                log::warn!("{e}");
                log::warn!("Adding movies is disabled until a key is configured (or use --manual)");
                return None;
            }
        },
    };
    log::debug!("OMDb key from {}", key.source());

    match OmdbClient::new(key) {
        Ok(client) => Some(client),
        Err(e) => {
            log::warn!("Could not set up the OMDb client: {e}");
            None
        }
    }
}

fn run_interactive(cli: &Cli) -> Result<(), CliError> {
    let store = open_store(cli)?;
    let client = build_fetcher(cli);
    let site = SiteOptions {
        template: cli.template.clone(),
        out_dir: cli.out_dir.clone(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let show_spinner = !cli.quiet && stdout.is_terminal();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let mut session = Session {
        catalog: Catalog::new(&store),
        console: Console::new(&mut input, &mut out),
        fetcher: client.as_ref().map(|c| c as &dyn MetadataSource),
        site: &site,
        manual_add: cli.manual,
        show_spinner,
    };
    session.run()
}
