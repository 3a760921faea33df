//! Resolves where the TOML configuration files live.
use std::{
    env,
    path::{Path, PathBuf},
};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "STARTUP_BUILDER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "config";

/// Returns the path of `file_name` inside the active configuration directory.
pub fn config_path(file_name: &str) -> PathBuf {
    let dir = resolve_config_dir(env::var(CONFIG_DIR_ENV).ok());
    join_config_path(&dir, file_name)
}

/// Blank overrides fall back to the default directory.
fn resolve_config_dir(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string())
}

fn join_config_path(dir: &str, file_name: &str) -> PathBuf {
    Path::new(dir).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_directory_and_file_name() {
        let path = join_config_path("config", "tasks.toml");
        assert_eq!(path, Path::new("config").join("tasks.toml"));
    }

    #[test]
    fn missing_or_blank_override_uses_default_dir() {
        assert_eq!(resolve_config_dir(None), "config");
        assert_eq!(resolve_config_dir(Some(String::new())), "config");
        assert_eq!(resolve_config_dir(Some("   \t".into())), "config");
    }

    #[test]
    fn override_is_trimmed() {
        assert_eq!(
            resolve_config_dir(Some("  /etc/startup-builder ".into())),
            "/etc/startup-builder"
        );
    }

    #[test]
    fn config_path_reads_override_from_env() {
        // Other tests load config files concurrently, so the override keeps
        // pointing at the default directory.
        env::set_var(CONFIG_DIR_ENV, "  config  ");
        let path = config_path("session.toml");
        env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(path, Path::new("config").join("session.toml"));
    }
}
