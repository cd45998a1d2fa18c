use super::*;

#[test]
fn empty_file_gives_defaults() {
    let config = MatchConfig::from_toml_str("").unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(config.num_games, 10);
    assert_eq!(config.max_plies, 200);
    assert!(config.alternate_colors);
    assert_eq!(config.seed, None);
}

#[test]
fn partial_file_overrides_named_fields() {
    let config = MatchConfig::from_toml_str(
        r#"
        num_games = 4
        seed = 17
        verbose = false
        "#,
    )
    .unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.seed, Some(17));
    assert!(!config.verbose);
    assert_eq!(config.depth, 3);
    assert_eq!(config.max_plies, 200);
}

#[test]
fn bad_types_are_rejected() {
    let err = MatchConfig::from_toml_str("num_games = \"many\"").unwrap_err();
    assert!(matches!(err, crate::error::ArenaError::Toml(_)));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("arena-config-{}.toml", std::process::id()));
    std::fs::write(&path, "max_plies = 60\ndepth = 2\n").unwrap();
    let config = MatchConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.max_plies, 60);
    assert_eq!(config.search_limits(), SearchLimits::depth(2));
}

#[test]
fn missing_file_is_io_error() {
    let err = MatchConfig::load("/nonexistent/arena/config.toml").unwrap_err();
    assert!(matches!(err, crate::error::ArenaError::Io(_)));
}
