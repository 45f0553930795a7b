// Configuration module unit tests
// Extracted from src/config/mod.rs for improved readability

use shortener::config::*;
use shortener::watermark::{Alignment, FontSpec, Variant, WatermarkConfig, WatermarkError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_can_deserialize_minimal_valid_yaml_config() {
    let yaml = r#"
watermark:
  type: default
"#;
    let config: Config = serde_yaml::from_str(yaml).expect("Failed to deserialize YAML");
    assert_eq!(config.watermark.variant, "default");
}

#[test]
fn test_full_config_resolves_watermark() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, b"png bytes").unwrap();

    let yaml = format!(
        r#"
logging:
  level: warn
  json: true
shortener:
  root: "{root}"
watermark:
  type: outside
  font: 3
  logo: "{logo}"
  width: 320
  height: 48
  top: true
  left: true
"#,
        root = dir.path().display(),
        logo = logo.display()
    );

    let config = Config::from_yaml_with_env(&yaml).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.json);
    assert_eq!(config.shortener.root.as_deref(), Some(dir.path()));

    let watermark = config.watermark_config().unwrap();
    assert_eq!(
        watermark,
        WatermarkConfig {
            variant: Variant::Outside,
            font: FontSpec::Builtin(3),
            logo: Some(logo),
            width: 320,
            height: 48,
            alignment: Alignment::new(true, true),
        }
    );
}

#[test]
fn test_missing_logo_falls_back_to_none() {
    let yaml = r#"
watermark:
  logo: /definitely/missing/logo.png
"#;
    let watermark = Config::from_yaml_with_env(yaml)
        .unwrap()
        .watermark_config()
        .unwrap();
    assert_eq!(watermark.logo, None);
}

#[test]
fn test_font_file_and_fallbacks() {
    let mut font_file = NamedTempFile::new().unwrap();
    font_file.write_all(b"font bytes").unwrap();

    let resolve = |font: &str| {
        let yaml = format!("watermark:\n  font: \"{}\"\n", font);
        Config::from_yaml_with_env(&yaml)
            .unwrap()
            .watermark_config()
            .unwrap()
            .font
    };

    assert_eq!(
        resolve(&font_file.path().display().to_string()),
        FontSpec::File(font_file.path().to_path_buf())
    );
    assert_eq!(resolve("2"), FontSpec::Builtin(2));
    assert_eq!(resolve("9"), FontSpec::Builtin(5));
    assert_eq!(resolve("/definitely/missing/font.ttf"), FontSpec::Builtin(5));
}

#[test]
fn test_unknown_variant_is_reported() {
    let config = Config::from_yaml_with_env("watermark:\n  type: diagonal\n").unwrap();
    assert!(config.validate().is_err());
    assert!(matches!(
        config.watermark_config(),
        Err(WatermarkError::Config(message)) if message.contains("diagonal")
    ));
}

#[test]
fn test_config_file_with_env_placeholders() {
    std::env::set_var("SHORTENER_UNIT_WATERMARK_TYPE", "inside");

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"watermark:\n  type: ${SHORTENER_UNIT_WATERMARK_TYPE}\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(
        config.watermark_config().unwrap().variant,
        Variant::Inside
    );

    std::env::remove_var("SHORTENER_UNIT_WATERMARK_TYPE");
}
