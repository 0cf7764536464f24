//! Data directory resolution

use crate::error::{NonepadError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "NONEPAD_DATA_DIR";

/// Resolve the directory holding `pages.json` and `content.txt`.
///
/// Order: explicit override (the `--dir` flag), then `NONEPAD_DATA_DIR`,
/// then the per-user configuration directory for this platform. The stores
/// receive the resolved path and never consult the environment themselves.
pub fn resolve(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if dir.is_empty() {
            return Err(NonepadError::Config(format!(
                "{} is set but empty; unset it or point it at a directory",
                DATA_DIR_ENV
            )));
        }
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from("com", "nonepad", "nonepad")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            NonepadError::Config(
                "could not determine a data directory for this platform".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_explicit_override_wins() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(DATA_DIR_ENV);
        std::env::set_var(DATA_DIR_ENV, "/somewhere/else");

        let dir = resolve(Some(PathBuf::from("/explicit"))).unwrap();
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_env_var_used_without_override() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(DATA_DIR_ENV);
        std::env::set_var(DATA_DIR_ENV, "/from/env");

        let dir = resolve(None).unwrap();
        assert_eq!(dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_empty_env_var_is_rejected() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(DATA_DIR_ENV);
        std::env::set_var(DATA_DIR_ENV, "");

        let result = resolve(None);
        match result {
            Err(NonepadError::Config(msg)) => assert!(msg.contains(DATA_DIR_ENV)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_platform_config_location() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(DATA_DIR_ENV);
        std::env::remove_var(DATA_DIR_ENV);

        // The exact path differs per platform; it always carries the
        // application name somewhere in it.
        let dir = resolve(None).unwrap();
        assert!(dir.to_string_lossy().contains("nonepad"));
    }
}
