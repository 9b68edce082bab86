//! Keep an existing config file in line with the current set of keys.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default config is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys known to this version that the file at `path` does not set.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, keeping existing values.
/// Returns the keys that were added.
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (k, v) in default_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn fills_in_missing_keys_without_touching_others() {
        let path = env::temp_dir().join("studybook_cfg_migrate_test.conf");
        fs::write(&path, "database: /tmp/x.sqlite\nopening_hour: 8\n").unwrap();

        let missing = missing_keys(&path).unwrap();
        assert!(missing.contains(&"closing_hour".to_string()));
        assert!(!missing.contains(&"database".to_string()));

        let added = migrate_config(&path).unwrap();
        assert_eq!(added, missing);
        assert!(missing_keys(&path).unwrap().is_empty());

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.opening_hour, 8);
        assert_eq!(cfg.closing_hour, 21);

        fs::remove_file(&path).ok();
    }
}
