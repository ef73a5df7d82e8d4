//! The interactive loop: pick a user, then run menu commands until exit.

use std::path::PathBuf;

use reelbox_catalog::Catalog;
use reelbox_db::UserId;
use reelbox_omdb::MetadataSource;

use crate::CliError;
use crate::commands::collection;
use crate::console::Console;
use crate::menu::{MenuChoice, UserChoice, parse_user_choice};

/// Where the website template is looked up when none is given.
pub(crate) const DEFAULT_TEMPLATE_PATH: &str = "_static/index_template.html";

/// Website generation settings.
pub(crate) struct SiteOptions {
    /// Explicit template; must exist when set.
    pub template: Option<PathBuf>,
    pub out_dir: PathBuf,
}

pub(crate) struct Session<'a> {
    pub catalog: Catalog<'a>,
    pub console: Console<'a>,
    /// `None` when no API key is configured.
    pub fetcher: Option<&'a dyn MetadataSource>,
    pub site: &'a SiteOptions,
    /// Prompt for year and rating instead of looking them up.
    pub manual_add: bool,
    pub show_spinner: bool,
}

impl Session<'_> {
    /// Run until the user exits or input ends.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        match self.run_loop() {
            Err(CliError::InputClosed) => Ok(()),
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<(), CliError> {
        self.console
            .heading("********** My Movies Database **********")?;

        let Some(mut user) = self.select_user()? else {
            return self.console.say("Bye!");
        };

        loop {
            self.print_menu()?;
            let answer = self
                .console
                .ask(&format!("Enter choice (0-{}): ", MenuChoice::max()))?;

            let Some(choice) = MenuChoice::parse(&answer) else {
                self.console.warn(&format!(
                    "Invalid choice. Enter a number between 0 and {}.",
                    MenuChoice::max()
                ))?;
                continue;
            };

            match choice {
                MenuChoice::Exit => return self.console.say("Bye!"),
                MenuChoice::SwitchUser => match self.select_user()? {
                    Some(next) => user = next,
                    None => return self.console.say("Bye!"),
                },
                command => {
                    if let Err(e) = self.dispatch(command, user) {
                        if matches!(e, CliError::InputClosed) {
                            return Err(e);
                        }
                        log::debug!("{choice:?} failed: {e:?}");
                        self.console.warn(&e.to_string())?;
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice, user: UserId) -> Result<(), CliError> {
        match choice {
            MenuChoice::List => collection::run_list(self, user),
            MenuChoice::Add => collection::run_add(self, user),
            MenuChoice::Delete => collection::run_delete(self, user),
            MenuChoice::Update => collection::run_update(self, user),
            MenuChoice::Stats => collection::run_stats(self, user),
            MenuChoice::Random => collection::run_random(self, user),
            MenuChoice::Search => collection::run_search(self, user),
            MenuChoice::SortedByRating => collection::run_sorted(self, user),
            MenuChoice::GenerateSite => collection::run_generate_site(self, user),
            MenuChoice::Exit | MenuChoice::SwitchUser => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        self.console.blank()?;
        self.console.heading("Menu:")?;
        for (n, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console
                .say(format!("{n}. {}", choice.label(self.manual_add)))?;
        }
        Ok(())
    }

    /// Show the user picker. `None` means the user chose to exit.
    fn select_user(&mut self) -> Result<Option<UserId>, CliError> {
        loop {
            let users = match self.catalog.users() {
                Ok(users) => users,
                Err(e) => {
                    log::debug!("listing users failed: {e:?}");
                    self.console.warn(&format!("Could not load users: {e}"))?;
                    let answer = self.console.ask("Press Enter to retry, or 0 to exit: ")?;
                    if answer == "0" {
                        return Ok(None);
                    }
                    continue;
                }
            };

            self.console.blank()?;
            self.console.heading("Welcome to the Movie App!")?;
            self.console.say("Select a user:")?;
            for (i, user) in users.iter().enumerate() {
                self.console.say(format!("{}. {}", i + 1, user.name))?;
            }
            self.console
                .say(format!("{}. Create new user", users.len() + 1))?;
            self.console.say(format!("{}. Exit", users.len() + 2))?;
            self.console.blank()?;

            let answer = self.console.ask("Enter choice: ")?;
            match parse_user_choice(&answer, users.len()) {
                Ok(UserChoice::Existing(i)) => {
                    let user = &users[i];
                    self.console
                        .success(&format!("Welcome back, {}!", user.name))?;
                    return Ok(Some(user.id));
                }
                Ok(UserChoice::Create) => {
                    let name = self.console.ask("Enter name for new user: ")?;
                    match self.catalog.register_user(&name) {
                        Ok(_) => self
                            .console
                            .success(&format!("User '{}' created successfully.", name.trim()))?,
                        Err(e) => self.console.warn(&e.to_string())?,
                    }
                }
                Ok(UserChoice::Exit) => return Ok(None),
                Err(e) => self.console.warn(&e.to_string())?,
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
