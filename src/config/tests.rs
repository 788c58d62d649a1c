use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_mixtape_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MIXTAPE_CONFIG_PATH", "/tmp/mixtape-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mixtape-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mixtape")
            .join("config.toml")
    );
}

#[test]
fn default_paths_fall_back_to_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.config/mixtape/config.toml")
    );
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/mixtape/mixtape.log")
    );
}

#[test]
fn defaults_match_classic_player() {
    let s = Settings::default();
    assert_eq!(s.library.extension, ".mp3");
    assert_eq!(s.playback.volume, 5.0);
    assert_eq!(s.playback.policy, SelectionPolicySetting::Sequential);
    assert_eq!(s.playback.poll_interval_ms, 500);
    assert_eq!(s.logging.level, "info");
    assert!(s.logging.file.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_policy_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extension = ".ogg"

[playback]
volume = 7.5
policy = "shuffle"
poll_interval_ms = 250

[ui]
header_text = "hello"

[logging]
level = "debug"
file = "/tmp/mixtape-test.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MIXTAPE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MIXTAPE__PLAYBACK__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extension, ".ogg");
    assert_eq!(s.playback.volume, 7.5);
    assert_eq!(s.playback.policy, SelectionPolicySetting::Random);
    assert_eq!(s.playback.poll_interval_ms, 250);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/mixtape-test.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 2.0
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MIXTAPE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MIXTAPE__PLAYBACK__VOLUME", "9");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 9.0);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.playback.poll_interval_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.volume = 11.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extension.clear();
    assert!(s.validate().is_err());
}
