use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
pub use tinyorm_core::config::Config;

static CONFIG_REL_PATHS: [&str; 2] = [".tinyorm/config.toml", ".tinyorm.toml"];

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("."), PathBuf::from("..")];
    paths.extend(dirs::config_dir());
    paths.extend(dirs::home_dir());
    paths
}

pub fn load_config() -> Result<Config> {
    load_from(&search_paths())
}

/// Load the first config file found, trying each directory in order.
fn load_from(search: &[PathBuf]) -> Result<Config> {
    for dir in search {
        for rel_path in &CONFIG_REL_PATHS {
            let path = dir.join(rel_path);
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading config");
                return read(&path);
            }
        }
    }
    Ok(Config::default())
}

pub fn read(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let buf = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&buf).with_context(|| format!("Invalid config in {}", path.display()))
}

fn parse(buf: &str) -> Result<Config> {
    Ok(toml::from_str(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel_path: &str, contents: &str) {
        let path = dir.join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_parse() {
        assert!(parse("strict = true").unwrap().strict);
        assert!(!parse("").unwrap().strict);
        assert!(parse("strict = 3").is_err());
    }

    #[test]
    fn test_read() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".tinyorm.toml", "strict = true\n");
        assert!(read(dir.path().join(".tinyorm.toml")).unwrap().strict);

        write(dir.path(), "bad.toml", "strict = \"sometimes\"\n");
        let err = read(dir.path().join("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
        assert!(read(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_search_order() {
        let near = TempDir::new().unwrap();
        let far = TempDir::new().unwrap();
        let dirs = vec![near.path().to_path_buf(), far.path().to_path_buf()];

        assert!(!load_from(&dirs).unwrap().strict);

        write(far.path(), ".tinyorm.toml", "strict = true");
        assert!(load_from(&dirs).unwrap().strict);

        write(near.path(), ".tinyorm.toml", "strict = false");
        assert!(!load_from(&dirs).unwrap().strict);

        write(near.path(), ".tinyorm/config.toml", "strict = true");
        assert!(load_from(&dirs).unwrap().strict);
    }
}
