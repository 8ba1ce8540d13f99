
use std::env;

use tempfile::TempDir;

pub(crate) const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set TANDEM_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("TANDEM_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Provide every required secret through the environment
pub(crate) fn set_required_secrets() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("TANDEM_AUTH_JWT_SECRET", TEST_JWT_SECRET),
        EnvGuard::set("TANDEM_CHAT_API_KEY", "test-key"),
        EnvGuard::set("TANDEM_CHAT_API_SECRET", "test-secret"),
    ]
}
