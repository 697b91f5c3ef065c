// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins:
//! 1. a directory passed to [`get_app_config_dir_with_override`]
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`]
//! 3. `IMPACT_FEED_CONFIG_DIR`, when set and not blank
//! 4. `<platform config dir>/ImpactFeed`
//!
//! Posts are never persisted, so nothing else is written here.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "ImpactFeed";

/// Names the config directory when `--config-dir` is absent.
pub const ENV_CONFIG_DIR: &str = "IMPACT_FEED_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. Only the first call counts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("--config-dir already recorded; ignoring second value");
    }
}

/// Config directory for this run, or `None` when the platform has no
/// config location and nothing overrides it.
///
/// Platform defaults: `~/.config/ImpactFeed` on Linux,
/// `~/Library/Application Support/ImpactFeed` on macOS and
/// `%APPDATA%\ImpactFeed` on Windows.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], with `override_path` taking priority over
/// the CLI flag and the environment.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var(ENV_CONFIG_DIR).ok();
    resolve_config_dir(override_path, cli, env)
}

fn resolve_config_dir(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| {
            env.filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Held by every test that touches IMPACT_FEED_CONFIG_DIR.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn platform_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(APP_NAME))
    }

    #[test]
    fn config_dir_flag_beats_environment() {
        let flag = PathBuf::from("/srv/impact/flag");
        let resolved = resolve_config_dir(
            None,
            Some(flag.clone()),
            Some("/srv/impact/env".to_string()),
        );
        assert_eq!(resolved, Some(flag));
    }

    #[test]
    fn explicit_dir_beats_flag_and_environment() {
        let explicit = PathBuf::from("/tmp/impact-feed-fixture");
        let resolved = resolve_config_dir(
            Some(explicit.clone()),
            Some(PathBuf::from("/srv/impact/flag")),
            Some("/srv/impact/env".to_string()),
        );
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn blank_environment_value_falls_through_to_platform_dir() {
        for blank in ["", "   "] {
            assert_eq!(
                resolve_config_dir(None, None, Some(blank.to_string())),
                platform_dir()
            );
        }
    }

    #[test]
    fn platform_dir_is_named_after_the_app() {
        if let Some(path) = resolve_config_dir(None, None, None) {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn impact_feed_config_dir_is_read_from_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::set_var(ENV_CONFIG_DIR, "/var/lib/impact-feed");

        let from_env = get_app_config_dir();
        let with_override = get_app_config_dir_with_override(Some(PathBuf::from("/opt/feed")));

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(from_env, Some(PathBuf::from("/var/lib/impact-feed")));
        assert_eq!(with_override, Some(PathBuf::from("/opt/feed")));
    }
}
