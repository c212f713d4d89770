use std::path::PathBuf;

use clap::Parser;

use crate::Cli;

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("shredder.json");
    std::fs::write(
        &config_path,
        r#"{ "flashcard_threshold": 8, "input": { "style": "Main" }, "anki": { "deck": "Anime" } }"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "shredder",
        "--config",
        config_path.to_str().unwrap(),
        "--threshold",
        "3",
        "--anki",
        "ep02.ass",
        "ep01.ass",
    ])
    .unwrap();
    let config = cli.into_config().unwrap();

    assert_eq!(config.flashcard_threshold, 3);
    assert_eq!(config.input.style, "Main");
    assert_eq!(config.anki.deck, "Anime");
    assert!(config.anki.enabled);
    assert_eq!(
        config.input.files,
        [PathBuf::from("ep02.ass"), PathBuf::from("ep01.ass")]
    );
    assert_eq!(config.output_dir, PathBuf::from("output"));
}

#[test]
fn missing_config_file_is_an_error() {
    let cli = Cli::try_parse_from(["shredder", "--config", "/nowhere/shredder.json"]).unwrap();
    assert!(cli.into_config().is_err());
}

#[test]
fn rejects_non_numeric_threshold() {
    assert!(Cli::try_parse_from(["shredder", "--threshold", "many"]).is_err());
}
