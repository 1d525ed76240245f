//! Portfolio documents and configuration files loaded from disk.

use std::fs;
use std::time::Duration;

use folio_config::{ConfigError, FolioConfig};
use folio_content::ContentError;
use folio_engine::{App, Portfolio, Section};
use folio_tui::{PageDocument, build_document};
use tempfile::TempDir;

const EMBEDDED: &str = include_str!("../../content/assets/portfolio.toml");

fn text(document: &PageDocument) -> String {
    document
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn custom_portfolio_renders_its_own_content() {
    let dir = TempDir::new().expect("temp dir");
    let source = EMBEDDED
        .replace("Raghav Garg", "Ada Lovelace")
        .replace("Scikit Learn", "Babbage");
    let path = write(&dir, "portfolio.toml", &source);

    let portfolio = Portfolio::load(&path).expect("valid portfolio");
    assert_eq!(portfolio.profile.name, "Ada Lovelace");

    let options = folio_engine::UiOptions {
        ascii_only: true,
        ..Default::default()
    };
    let rendered = text(&build_document(&portfolio, 100, false, options, 1843));
    assert!(rendered.contains("Ada Lovelace"));
    assert!(rendered.contains("Babbage"));
    assert!(rendered.contains("(c) 1843 Ada Lovelace"));
    assert!(!rendered.contains("Raghav"));
}

#[test]
fn invalid_portfolios_are_rejected() {
    let err = Portfolio::from_toml_str(&EMBEDDED.replace("level = 90", "level = 120"))
        .expect_err("level over 100");
    assert!(
        matches!(err, ContentError::SkillLevel { level: 120, .. }),
        "{err}"
    );

    let blank = EMBEDDED.replace(r#"name = "Raghav Garg""#, r#"name = " ""#);
    let err = Portfolio::from_toml_str(&blank).expect_err("blank name");
    assert!(matches!(err, ContentError::EmptyField { .. }), "{err}");

    let err = Portfolio::from_toml_str("[profile]\nbrand = 1").expect_err("not a portfolio");
    assert!(matches!(err, ContentError::Parse(_)), "{err}");
}

#[test]
fn missing_portfolio_file_reports_its_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.toml");
    match Portfolio::load(&path) {
        Err(ContentError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn config_file_drives_the_app() {
    let dir = TempDir::new().expect("temp dir");
    let content = write(
        &dir,
        "mine.toml",
        &EMBEDDED.replace("Raghav Garg", "Grace Hopper"),
    );
    let config_source = format!(
        "[app]\ncontent_path = {:?}\n\n[ui]\nascii_only = true\nreduced_motion = true\n\n[scroll]\nsmooth_scroll_ms = 250\nmenu_breakpoint = 70\n",
        content.display().to_string()
    );
    let config_path = write(&dir, "config.toml", &config_source);

    let config = FolioConfig::load_from(&config_path).expect("valid config");
    assert_eq!(config.content_path().as_deref(), Some(content.as_path()));
    assert_eq!(config.smooth_scroll_duration(), Duration::from_millis(250));

    let portfolio = Portfolio::load(&content).expect("configured portfolio");
    let mut app = App::new(portfolio, &config);
    assert_eq!(app.portfolio().profile.name, "Grace Hopper");
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().reduced_motion);
    assert!(!app.is_compact_width(80));
    assert!(app.is_compact_width(69));

    // Reduced motion makes navigation land immediately.
    let document = build_document(app.portfolio(), 80, false, app.ui_options(), 2024);
    app.set_layout(80, document.geometry.clone(), 20);
    app.navigate_to(Section::About);
    assert!(!app.page().is_animating());
    assert_eq!(app.scroll_state().active_section(), Section::About);
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "config.toml", "[ui\nascii_only = true");
    let err = FolioConfig::load_from(&path).expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}
