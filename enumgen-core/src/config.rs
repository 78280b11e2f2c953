//! Configuration loading from enumgen.toml.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{EnumgenError, EnumgenResult, IoResultExt};
use crate::extract::Detection;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "enumgen.toml";

/// Main configuration structure for enumgen.toml.
///
/// Every field is optional; unset fields keep the builder defaults.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnumgenConfig {
    /// Output file (or directory) for generated code.
    pub output: Option<PathBuf>,
    /// Emit serde impls.
    pub marshal: Option<bool>,
    /// Case-insensitive parsing.
    pub lower: Option<bool>,
    /// `"name"` or `"attribute"`.
    pub detection: Option<Detection>,
    /// Name marker substring.
    pub marker: Option<String>,
    /// Annotation key.
    pub key: Option<String>,
    /// Field attribute carrying the annotation.
    pub tag_attribute: Option<String>,
    /// Struct opt-in attribute for attribute detection.
    pub attribute: Option<String>,
    /// Pretty-print the output.
    pub format: Option<bool>,
}

/// Loads configuration from `enumgen.toml` in `dir` if it exists.
pub fn load_config(dir: &Path) -> EnumgenResult<Option<EnumgenConfig>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file.
pub fn load_config_file(path: &Path) -> EnumgenResult<EnumgenConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    toml::from_str(&content).map_err(|e| EnumgenError::config(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("enumgen_config_{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = temp_dir("missing");
        assert_eq!(load_config(&dir).unwrap(), None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = temp_dir("full");
        fs::write(
            dir.join(CONFIG_FILE),
            r#"
output = "src/enums_gen.rs"
marshal = true
lower = false
detection = "attribute"
marker = "Kind"
key = "value"
tag_attribute = "meta"
attribute = "generate"
format = false
"#,
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.output, Some(PathBuf::from("src/enums_gen.rs")));
        assert_eq!(cfg.marshal, Some(true));
        assert_eq!(cfg.lower, Some(false));
        assert_eq!(cfg.detection, Some(Detection::Attribute));
        assert_eq!(cfg.marker.as_deref(), Some("Kind"));
        assert_eq!(cfg.key.as_deref(), Some("value"));
        assert_eq!(cfg.tag_attribute.as_deref(), Some("meta"));
        assert_eq!(cfg.attribute.as_deref(), Some("generate"));
        assert_eq!(cfg.format, Some(false));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config() {
        let dir = temp_dir("partial");
        fs::write(dir.join(CONFIG_FILE), "marshal = true\n").unwrap();
        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.marshal, Some(true));
        assert_eq!(cfg.output, None);
        assert_eq!(cfg.detection, None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = temp_dir("invalid");
        fs::write(dir.join(CONFIG_FILE), "detection = \"guess\"\n").unwrap();
        let err = load_config(&dir).unwrap_err();
        assert!(matches!(err, EnumgenError::Config { .. }));

        fs::write(dir.join(CONFIG_FILE), "unknown_key = 1\n").unwrap();
        assert!(load_config(&dir).is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
