use std::fs;
use std::path::{Path, PathBuf};

use reelbox_db::{MovieMap, format_rating};

use crate::SiteError;

/// Replaced with `"<user>'s Movies"`.
pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
/// Replaced with one `<li class="movie">` per movie.
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Template used when no template file is available.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>__TEMPLATE_TITLE__</title>
    <style>
        body { font-family: sans-serif; background: #f5f5f5; margin: 0; }
        .header { background: #283044; color: #fff; padding: 24px; }
        .movie-grid { list-style: none; display: flex; flex-wrap: wrap; padding: 16px; margin: 0; }
        .movie { background: #fff; width: 220px; margin: 8px; padding: 12px; border-radius: 4px; }
        .movie-title { font-weight: bold; }
        .movie-year { color: #666; font-size: 0.9em; }
    </style>
</head>
<body>
<div class="header"><h1>__TEMPLATE_TITLE__</h1></div>
<ol class="movie-grid">
__TEMPLATE_MOVIE_GRID__
</ol>
</body>
</html>
"#;

/// Renders a collection into a single static HTML page.
pub struct SiteGenerator {
    template: String,
}

impl SiteGenerator {
    /// Use a template string directly. Both placeholders must be present.
    pub fn new(template: impl Into<String>) -> Result<Self, SiteError> {
        let template = template.into();
        for placeholder in [TITLE_PLACEHOLDER, GRID_PLACEHOLDER] {
            if !template.contains(placeholder) {
                return Err(SiteError::InvalidTemplate(placeholder));
            }
        }
        Ok(Self { template })
    }

    /// The built-in template.
    pub fn builtin() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Read a template file.
    pub fn from_file(path: &Path) -> Result<Self, SiteError> {
        if !path.exists() {
            return Err(SiteError::TemplateNotFound(path.to_path_buf()));
        }
        Self::new(fs::read_to_string(path)?)
    }

    /// Read `path` if it exists, otherwise fall back to the built-in template.
    pub fn from_file_or_builtin(path: &Path) -> Result<Self, SiteError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!(
                "No template at {}, using built-in template",
                path.display()
            );
            Ok(Self::builtin())
        }
    }

    /// Fill the template for one user's collection.
    pub fn render(&self, user_name: &str, movies: &MovieMap) -> String {
        let mut grid = String::new();
        for (title, movie) in movies {
            grid.push_str("        <li class=\"movie\">\n");
            grid.push_str(&format!(
                "            <div class=\"movie-title\">{}</div>\n",
                escape_html(title)
            ));
            grid.push_str(&format!(
                "            <div class=\"movie-year\">Year: {} | Rating: {}</div>\n",
                movie.year,
                format_rating(movie.rating)
            ));
            grid.push_str("        </li>\n");
        }

        self.template
            .replace(
                TITLE_PLACEHOLDER,
                &escape_html(&format!("{user_name}'s Movies")),
            )
            .replace(GRID_PLACEHOLDER, &grid)
    }

    /// Render and write `<user_name>.html` into `out_dir`.
    ///
    /// Returns the path written.
    pub fn write(
        &self,
        out_dir: &Path,
        user_name: &str,
        movies: &MovieMap,
    ) -> Result<PathBuf, SiteError> {
        if movies.is_empty() {
            return Err(SiteError::NoMovies);
        }

        fs::create_dir_all(out_dir)?;
        let path = out_dir.join(page_file_name(user_name));
        fs::write(&path, self.render(user_name, movies))?;
        log::debug!("Wrote {} movies to {}", movies.len(), path.display());
        Ok(path)
    }
}

/// `<user_name>.html`, with path separators and other unsafe characters replaced.
fn page_file_name(user_name: &str) -> String {
    let stem: String = user_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim_matches('.');
    if stem.is_empty() {
        "movies.html".to_string()
    } else {
        format!("{stem}.html")
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
