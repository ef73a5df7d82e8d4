//! Menu commands that read or change the current user's collection.

use std::path::Path;

use reelbox_catalog::{CatalogError, normalize_title, parse_rating, parse_year};
use reelbox_db::{UserId, format_rating};
use reelbox_site::SiteGenerator;

use crate::CliError;
use crate::session::{DEFAULT_TEMPLATE_PATH, Session};
use crate::spinner::lookup_spinner;

const NO_MOVIES: &str = "No movies available.";

pub(crate) fn run_list(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let movies = s.catalog.movies(user)?;
    if movies.is_empty() {
        return s.console.warn(NO_MOVIES);
    }

    s.console.blank()?;
    s.console.say(format!("{} movies in total", movies.len()))?;
    for (title, movie) in &movies {
        s.console.say(format!(
            "{title} ({}): {}",
            movie.year,
            format_rating(movie.rating)
        ))?;
    }
    Ok(())
}

pub(crate) fn run_add(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    if s.manual_add {
        return run_add_manual(s, user);
    }

    let Some(fetcher) = s.fetcher else {
        return s.console.warn(
            "OMDb API key not found. Set $OMDB_API_KEY or run 'reelbox config set-key <KEY>'.",
        );
    };

    let title = s.console.ask("Enter movie title: ")?;
    if title.is_empty() {
        return s.console.warn("Movie title cannot be empty.");
    }
    if s.catalog.has_movie(user, &title)? {
        return s
            .console
            .warn(&format!("Movie '{title}' already exists in your collection!"));
    }

    let spinner = lookup_spinner(&title, s.show_spinner);
    let result = fetcher.lookup(&title);
    spinner.finish_and_clear();

    let meta = match result {
        Ok(meta) => meta,
        Err(e) => {
            log::debug!("OMDb lookup for '{title}' failed: {e:?}");
            return s.console.warn(&format!("Could not add movie: {e}"));
        }
    };

    let added = s.catalog.add_movie(user, &meta.title, meta.year, meta.rating)?;
    s.console.success(&format!(
        "Movie '{}' added successfully to your collection!",
        added.title
    ))
}

/// Prompt for every field, reprompting on bad year or rating.
fn run_add_manual(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let title = s
        .console
        .ask_until("Enter new movie name: ", normalize_title)?;
    if s.catalog.has_movie(user, &title)? {
        return s
            .console
            .warn(&format!("Movie '{title}' already exists in your collection!"));
    }

    let year_text = s.console.ask_until("Enter movie year: ", |t| {
        parse_year(t).map(|_| t.to_string())
    })?;
    let rating_text = s.console.ask_until("Enter movie rating: ", |t| {
        parse_rating(t).map(|_| t.to_string())
    })?;

    let added = s
        .catalog
        .add_movie_for_user(user, &title, &year_text, &rating_text)?;
    s.console
        .success(&format!("Movie '{}' successfully added", added.title))
}

pub(crate) fn run_delete(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let title = s.console.ask("Enter movie name to delete: ")?;
    if title.is_empty() {
        return s.console.warn("Movie title cannot be empty.");
    }

    if s.catalog.delete_movie(user, &title)? {
        s.console
            .success(&format!("Movie '{title}' deleted successfully."))
    } else {
        s.console.warn("Movie not found in your collection.")
    }
}

pub(crate) fn run_update(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let title = s.console.ask("Enter movie name to update: ")?;
    if title.is_empty() {
        return s.console.warn("Movie title cannot be empty.");
    }

    let rating_text = s.console.ask_until("Enter new rating: ", |t| {
        parse_rating(t).map(|_| t.to_string())
    })?;

    if s.catalog.update_rating(user, &title, &rating_text)? {
        s.console
            .success(&format!("Movie '{title}' updated successfully."))
    } else {
        s.console.warn("Movie not found in your collection.")
    }
}

pub(crate) fn run_stats(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let stats = match s.catalog.compute_stats(user) {
        Ok(stats) => stats,
        Err(CatalogError::NoMovies) => return s.console.warn(NO_MOVIES),
        Err(e) => return Err(e.into()),
    };

    s.console
        .say(format!("Average rating: {:.2}", stats.average))?;
    s.console.say(format!("Median rating: {:.2}", stats.median))?;
    s.console.say("Best movie(s):")?;
    for (title, rating) in &stats.best {
        s.console.say(format!("{title}, {}", format_rating(*rating)))?;
    }
    s.console.say("Worst movie(s):")?;
    for (title, rating) in &stats.worst {
        s.console.say(format!("{title}, {}", format_rating(*rating)))?;
    }
    Ok(())
}

pub(crate) fn run_random(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    match s.catalog.random_movie(user) {
        Ok(movie) => s.console.say(movie),
        Err(CatalogError::NoMovies) => s.console.warn(NO_MOVIES),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn run_search(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let query = s.console.ask("Enter part of movie name: ")?;

    let mut found = false;
    for movie in s.catalog.search(user, &query)? {
        s.console.say(movie)?;
        found = true;
    }
    if !found {
        s.console.warn("No movies found.")?;
    }
    Ok(())
}

pub(crate) fn run_sorted(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let movies = s.catalog.sorted_by_rating(user)?;
    if movies.is_empty() {
        return s.console.warn(NO_MOVIES);
    }
    for movie in movies {
        s.console.say(movie)?;
    }
    Ok(())
}

pub(crate) fn run_generate_site(s: &mut Session<'_>, user: UserId) -> Result<(), CliError> {
    let movies = s.catalog.movies(user)?;
    if movies.is_empty() {
        return s.console.warn("No movies available to generate website.");
    }
    let user_name = s.catalog.user_name(user)?;

    let generator = match &s.site.template {
        Some(path) => SiteGenerator::from_file(path)?,
        None => SiteGenerator::from_file_or_builtin(Path::new(DEFAULT_TEMPLATE_PATH))?,
    };
    let path = generator.write(&s.site.out_dir, &user_name, &movies)?;

    s.console.success(&format!(
        "Website '{}' was generated successfully.",
        path.display()
    ))
}
