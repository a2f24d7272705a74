// tests/config_test.rs
use image_tag::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.default_image, None);
    assert_eq!(config.git.binary, "git");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
default_image = "registry.io/team/myapp"

[git]
binary = "/opt/git/bin/git"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.default_image,
        Some("registry.io/team/myapp".to_string())
    );
    assert_eq!(config.git.binary, "/opt/git/bin/git");
}

#[test]
fn test_load_from_file_partial_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(br#"default_image = "myapp""#)
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.default_image, Some("myapp".to_string()));
    assert_eq!(config.git.binary, "git");
}

#[test]
fn test_load_missing_custom_path_fails() {
    let result = load_config(Some("/nonexistent/path/imagetag.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"default_image = [not valid").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}
