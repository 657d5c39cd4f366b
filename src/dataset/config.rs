use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const OPLIB_ROOT_VAR: &str = "OPLIB_ROOT";
pub const TSPLIB_ROOT_VAR: &str = "TSPLIB_ROOT";

/// Where the datasets live on this machine.
///
/// ```toml
/// oplib_root = "/data/oplib"
/// tsplib_root = "/data/tsplib95"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    pub oplib_root: Option<PathBuf>,
    pub tsplib_root: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut f = File::open(path).map_err(|err| Error::open(path, err))?;
        let mut s = String::new();
        f.read_to_string(&mut s).map_err(|err| Error::io(path, err))?;
        Self::parse(&s).map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Config(err.to_string()))
    }

    /// Roots from `OPLIB_ROOT` and `TSPLIB_ROOT`; unset variables leave the
    /// root unconfigured.
    pub fn from_env() -> Self {
        Self {
            oplib_root: std::env::var_os(OPLIB_ROOT_VAR).map(PathBuf::from),
            tsplib_root: std::env::var_os(TSPLIB_ROOT_VAR).map(PathBuf::from),
        }
    }

    pub fn oplib_root(&self) -> Result<&Path> {
        self.oplib_root
            .as_deref()
            .ok_or_else(|| Error::Config(format!("oplib_root is not set (or {})", OPLIB_ROOT_VAR)))
    }

    pub fn tsplib_root(&self) -> Result<&Path> {
        self.tsplib_root
            .as_deref()
            .ok_or_else(|| Error::Config(format!("tsplib_root is not set (or {})", TSPLIB_ROOT_VAR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roots() -> anyhow::Result<()> {
        let config = DatasetConfig::parse("oplib_root = \"/data/oplib\"\n")?;
        assert_eq!(config.oplib_root()?, Path::new("/data/oplib"));
        assert!(matches!(config.tsplib_root(), Err(Error::Config(_))));

        let config = DatasetConfig::parse("")?;
        assert_eq!(config, DatasetConfig::default());
        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            DatasetConfig::parse("oplib = \"/data\"\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            DatasetConfig::parse("oplib_root = 3\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_from_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("tspwplib-datasets-{}.toml", std::process::id()));
        std::fs::write(&path, "oplib_root = \"resources/oplib\"\ntsplib_root = \"resources/tsplib\"\n")?;
        let config = DatasetConfig::load(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(config.tsplib_root()?, Path::new("resources/tsplib"));

        assert!(matches!(
            DatasetConfig::load("resources/missing.toml"),
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[test]
    fn roots_from_environment() -> anyhow::Result<()> {
        std::env::set_var(OPLIB_ROOT_VAR, "resources/oplib");
        std::env::remove_var(TSPLIB_ROOT_VAR);
        let config = DatasetConfig::from_env();
        assert_eq!(config.oplib_root()?, Path::new("resources/oplib"));
        assert_eq!(config.tsplib_root, None);
        Ok(())
    }
}
