use super::*;
use reelbox_db::MovieEntry;

fn movies(entries: &[(&str, i32, f64)]) -> MovieMap {
    entries
        .iter()
        .map(|(title, year, rating)| {
            (
                title.to_string(),
                MovieEntry {
                    year: *year,
                    rating: *rating,
                },
            )
        })
        .collect()
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_html("<b>"), "&lt;b&gt;");
    assert_eq!(escape_html("Schindler's List"), "Schindler&#39;s List");
}

#[test]
fn test_page_file_name() {
    assert_eq!(page_file_name("alice"), "alice.html");
    assert_eq!(page_file_name("../etc/passwd"), "_etc_passwd.html");
    assert_eq!(page_file_name("..."), "movies.html");
}

#[test]
fn test_render_whole_rating_keeps_decimal() {
    let site = SiteGenerator::builtin();
    let html = site.render("alice", &movies(&[("Heat", 1995, 9.0)]));
    assert!(html.contains("Year: 1995 | Rating: 9.0"));
}

#[test]
fn test_render_fills_placeholders() {
    let site = SiteGenerator::builtin();
    let html = site.render("alice", &movies(&[("Inception", 2010, 8.8)]));

    assert!(html.contains("<title>alice&#39;s Movies</title>"));
    assert!(html.contains("<div class=\"movie-title\">Inception</div>"));
    assert!(html.contains("Year: 2010 | Rating: 8.8"));
    assert!(!html.contains(TITLE_PLACEHOLDER));
    assert!(!html.contains(GRID_PLACEHOLDER));
}

#[test]
fn test_render_escapes_titles() {
    let site = SiteGenerator::new("__TEMPLATE_TITLE__|__TEMPLATE_MOVIE_GRID__").unwrap();
    let html = site.render("bob", &movies(&[("<script>", 2000, 1.0)]));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_template_requires_placeholders() {
    assert!(matches!(
        SiteGenerator::new("<html>__TEMPLATE_TITLE__</html>"),
        Err(SiteError::InvalidTemplate(GRID_PLACEHOLDER))
    ));
}

#[test]
fn test_missing_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index_template.html");

    assert!(matches!(
        SiteGenerator::from_file(&path),
        Err(SiteError::TemplateNotFound(_))
    ));
    assert!(SiteGenerator::from_file_or_builtin(&path).is_ok());
}

#[test]
fn test_write_creates_user_page() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("index_template.html");
    std::fs::write(
        &template,
        "<h1>__TEMPLATE_TITLE__</h1><ul>__TEMPLATE_MOVIE_GRID__</ul>",
    )
    .unwrap();

    let site = SiteGenerator::from_file(&template).unwrap();
    let out = dir.path().join("out");
    let path = site
        .write(&out, "alice", &movies(&[("Heat", 1995, 8.3), ("Up", 2009, 8.3)]))
        .unwrap();

    assert_eq!(path, out.join("alice.html"));
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<h1>alice&#39;s Movies</h1>"));
    assert_eq!(html.matches("<li class=\"movie\">").count(), 2);
}

#[test]
fn test_write_refuses_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let site = SiteGenerator::builtin();
    assert!(matches!(
        site.write(dir.path(), "alice", &MovieMap::new()),
        Err(SiteError::NoMovies)
    ));
    assert!(!dir.path().join("alice.html").exists());
}
