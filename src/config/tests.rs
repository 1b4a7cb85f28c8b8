use std::io::Write;

use super::*;

#[test]
fn defaults_are_compact_info_and_shared_anchors() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert_eq!(settings.logging.format, LogFormat::Compact);
    assert!(!settings.render.unique_anchors);
    assert!(!settings.render.sanitize);
    assert_eq!(settings.render.words_per_minute.get(), DEFAULT_WORDS_PER_MINUTE);
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("info".to_string());
    raw.render.words_per_minute = Some(180);
    raw.render.sanitize = Some(true);

    let overrides = RenderOverrides {
        words_per_minute: Some(300),
        sanitize: Some(false),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.render.words_per_minute.get(), 300);
    assert!(!settings.render.sanitize);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = RenderOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn zero_words_per_minute_is_rejected() {
    let mut raw = RawSettings::default();
    raw.render.words_per_minute = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero must be rejected");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "render.words_per_minute",
            ..
        }
    ));
}

#[test]
fn oversized_words_per_minute_is_rejected() {
    let mut raw = RawSettings::default();
    raw.render.words_per_minute = Some(u64::from(u32::MAX) + 1);

    let err = Settings::from_raw(raw).expect_err("overflow must be rejected");
    assert!(err.to_string().contains("exceeds supported range"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid level");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn config_file_is_layered_under_cli_overrides() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    writeln!(
        file,
        "[render]\nunique_anchors = true\nwords_per_minute = 200\n\n[logging]\nlevel = \"warn\""
    )
    .expect("write config");

    let path = file.path().to_string_lossy().into_owned();
    let args = CliArgs::parse_from([
        "richdoc",
        "--config-file",
        path.as_str(),
        "render",
        "--words-per-minute",
        "250",
    ]);

    let settings = load(&args).expect("settings load");

    assert!(settings.render.unique_anchors);
    assert_eq!(settings.render.words_per_minute.get(), 250);
    assert_eq!(settings.logging.level, LevelFilter::WARN);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let path = missing.to_string_lossy().into_owned();

    let args = CliArgs::parse_from(["richdoc", "--config-file", path.as_str(), "headings"]);

    assert!(matches!(load(&args), Err(LoadError::Build(_))));
}

#[test]
fn parse_render_arguments() {
    let args = CliArgs::parse_from([
        "richdoc",
        "render",
        "doc.json",
        "--output",
        "out.html",
        "--format",
        "json",
        "--unique-anchors",
        "yes",
        "--sanitize",
        "true",
    ]);

    match args.command {
        Command::Render(render) => {
            assert_eq!(
                render.input.as_deref(),
                Some(std::path::Path::new("doc.json"))
            );
            assert_eq!(
                render.output.as_deref(),
                Some(std::path::Path::new("out.html"))
            );
            assert_eq!(render.format, OutputFormat::Json);
            assert_eq!(render.overrides.unique_anchors, Some(true));
            assert_eq!(render.overrides.sanitize, Some(true));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_headings_arguments_defaults() {
    let args = CliArgs::parse_from(["richdoc", "headings"]);

    match args.command {
        Command::Headings(headings) => {
            assert!(headings.input.is_none());
            assert!(!headings.outline);
            assert!(headings.overrides.unique_anchors.is_none());
        }
        _ => panic!("wrong command parsed"),
    }
}
