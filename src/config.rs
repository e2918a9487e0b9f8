//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::eyre;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Brushes with fewer faces are reported by `illegal_brush`.
    pub min_brush_faces: usize,
    /// Brushes with more faces are reported by `illegal_brush`.
    pub max_brush_faces: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            min_brush_faces: 4,
            max_brush_faces: 32,
        }
    }
}

pub static CONFIG_FILE_NAME: &str = "polysoup.toml";

/// Parse `polysoup.toml` in the same folder as the binary
///
/// No file means default values.
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    parse_config_from_str(&buffer)
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<Config> {
    let config: Config = toml::from_str(s)?;

    if config.min_brush_faces > config.max_brush_faces {
        return Err(eyre!(
            "min_brush_faces ({}) is greater than max_brush_faces ({})",
            config.min_brush_faces,
            config.max_brush_faces
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert_eq!(parse_config_from_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial() {
        let config = parse_config_from_str("max_brush_faces = 64").unwrap();

        assert_eq!(config.max_brush_faces, 64);
        assert_eq!(config.min_brush_faces, 4);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn inverted_bounds() {
        assert!(parse_config_from_str("min_brush_faces = 10\nmax_brush_faces = 6").is_err());
    }

    #[test]
    fn bad_toml() {
        assert!(parse_config_from_str("min_brush_faces = \"six\"").is_err());
    }

    #[test]
    fn from_file() {
        let path = std::env::temp_dir()
            .join(format!("polysoup_config_from_file_{}.toml", std::process::id()));
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = parse_config_from_file(&path).unwrap();

        assert_eq!(config.log_level, "debug");

        std::fs::remove_file(&path).unwrap();
    }
}
