use std::io::Write;

use vecy::{Canvas, CanvasConfig, ConfigError};

#[test]
fn test_partial_json_keeps_defaults() {
    let config = CanvasConfig::from_json_str(r#"{ "view": { "scale_max": 8.0 } }"#).unwrap();
    assert_eq!(config.view.scale_max, 8.0);
    assert_eq!(config.view.scale_min, 0.1);

    let canvas = Canvas::from_config(&config).unwrap();
    assert_eq!(canvas.transform().scale_max(), 8.0);
}

#[test]
fn test_unknown_color_is_reported_with_field() {
    let config = CanvasConfig::from_json_str(r#"{ "settings": { "grid_color": { "name": "chartreuse" } } }"#).unwrap();
    match Canvas::from_config(&config) {
        Err(ConfigError::Palette { field, .. }) => assert_eq!(field, "grid_color"),
        other => panic!("expected palette error, got {other:?}"),
    }
}

#[test]
fn test_inverted_scale_bounds_rejected() {
    let err = CanvasConfig::from_json_str(r#"{ "view": { "scale_min": 4.0, "scale_max": 2.0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidScaleBounds { .. }));
}

#[test]
fn test_load_from_file_and_missing_file() {
    let path = std::env::temp_dir().join(format!("vecy-config-{}.json", std::process::id()));
    let json = CanvasConfig::default().to_json_string().unwrap();
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(json.as_bytes()))
        .unwrap();

    let loaded = CanvasConfig::load(&path).unwrap();
    assert_eq!(loaded, CanvasConfig::default());
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(CanvasConfig::load(&path), Err(ConfigError::Io(_))));
}
