// ============================================================================
// Konnyaku - 设置数据模型与存储
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 持久化设置、默认值及变更通知
// 边界:
//   - ✅ 设置数据结构定义
//   - ✅ 设置序列化/反序列化
//   - ✅ 设置文件读写
//   - ✅ 向订阅者通知变更
//   - ✅ 运行时 (命令行 / 环境变量) 覆盖
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含命令行参数解析
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tokio::sync::broadcast;

use crate::utils::constants::{API_KEY_ENV, APP_DIR_NAME, CONFIG_FILE_NAME};

/// Subscribers lagging further than this miss older change events.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Konnyaku settings, keyed like the extension's storage entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Gemini API key
    #[serde(default)]
    pub api_key: String,
    /// Language translations are produced in
    #[serde(default = "Config::default_target_language")]
    pub target_language: String,
    /// Languages offered in the language picker (empty: all)
    #[serde(default)]
    pub preferred_languages: Vec<String>,
    /// Interface language override (absent: follow the environment locale)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_language: Option<String>,
}

/// Partial update; only the provided fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub preferred_languages: Option<Vec<String>>,
    /// An empty string removes the override.
    #[serde(default)]
    pub ui_language: Option<String>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none()
            && self.target_language.is_none()
            && self.preferred_languages.is_none()
            && self.ui_language.is_none()
    }
}

/// Keys whose value actually changed, with their new values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigChange {
    pub api_key: Option<String>,
    pub target_language: Option<String>,
    pub preferred_languages: Option<Vec<String>>,
    /// `Some(None)` means the override was removed.
    pub ui_language: Option<Option<String>>,
}

impl ConfigChange {
    pub fn between(old: &Config, new: &Config) -> Self {
        Self {
            api_key: (old.api_key != new.api_key).then(|| new.api_key.clone()),
            target_language: (old.target_language != new.target_language)
                .then(|| new.target_language.clone()),
            preferred_languages: (old.preferred_languages != new.preferred_languages)
                .then(|| new.preferred_languages.clone()),
            ui_language: (old.ui_language != new.ui_language).then(|| new.ui_language.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_none()
            && self.target_language.is_none()
            && self.preferred_languages.is_none()
            && self.ui_language.is_none()
    }
}

/// Overrides from the command line and environment (never persisted)
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    /// `--api-key`; always wins over the saved key
    pub api_key: Option<String>,
    /// `GEMINI_API_KEY`; only used while no key is saved
    pub env_api_key: Option<String>,
    pub target_language: Option<String>,
    pub ui_language: Option<String>,
}

impl RuntimeArgs {
    /// Read the API key environment variable.
    pub fn with_env(mut self) -> Self {
        self.env_api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty());
        self
    }
}

/// Default values that don't depend on a loaded file
pub trait ConfigDefaults {
    fn default_target_language() -> String {
        crate::translation::languages::DEFAULT_TARGET_LANGUAGE.to_string()
    }

    /// `$XDG_CONFIG_HOME/konnyaku/konnyaku.toml` or the platform equivalent
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }
}

impl ConfigDefaults for Config {}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            target_language: Self::default_target_language(),
            preferred_languages: Vec::new(),
            ui_language: None,
        }
    }
}

impl Config {
    /// Load settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(api_key) = &patch.api_key {
            self.api_key = api_key.trim().to_string();
        }
        if let Some(target_language) = &patch.target_language {
            self.target_language = target_language.clone();
        }
        if let Some(preferred_languages) = &patch.preferred_languages {
            self.preferred_languages = preferred_languages.clone();
        }
        if let Some(ui_language) = &patch.ui_language {
            self.ui_language = Some(ui_language.clone()).filter(|code| !code.is_empty());
        }
    }

    /// Settings with runtime overrides applied on top
    pub fn merge_runtime_args(mut self, args: &RuntimeArgs) -> Self {
        if let Some(api_key) = &args.api_key {
            self.api_key = api_key.clone();
        } else if let Some(api_key) = args.env_api_key.as_ref().filter(|_| self.api_key.is_empty()) {
            self.api_key = api_key.clone();
        }
        if let Some(target_language) = &args.target_language {
            self.target_language = target_language.clone();
        }
        if let Some(ui_language) = &args.ui_language {
            self.ui_language = Some(ui_language.clone());
        }
        self
    }
}

/// File-backed settings store with change subscriptions
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    current: RwLock<Config>,
    changes: broadcast::Sender<ConfigChange>,
}

impl ConfigStore {
    /// Open the store at `path`, loading what is already saved there
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let config = Config::load_from(&path)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self {
            path,
            current: RwLock::new(config),
            changes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current settings
    pub fn get(&self) -> anyhow::Result<Config> {
        let config = self
            .current
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings read lock"))?;
        Ok(config.clone())
    }

    /// Saved interface language override, if any
    pub fn ui_language(&self) -> anyhow::Result<Option<String>> {
        Ok(self.get()?.ui_language)
    }

    /// Write the provided fields and notify subscribers of what changed
    pub fn set(&self, patch: &ConfigPatch) -> anyhow::Result<ConfigChange> {
        let mut config = self
            .current
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings write lock"))?;

        let mut updated = config.clone();
        updated.apply(patch);
        updated.save_to(&self.path)?;

        let change = ConfigChange::between(&config, &updated);
        *config = updated;
        drop(config);

        self.publish(&change);
        Ok(change)
    }

    /// Remove the settings file and reset to defaults
    pub fn clear(&self) -> anyhow::Result<ConfigChange> {
        let mut config = self
            .current
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire settings write lock"))?;

        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove {}", self.path.display()))?;
        }

        let defaults = Config::default();
        let change = ConfigChange::between(&config, &defaults);
        *config = defaults;
        drop(config);

        self.publish(&change);
        Ok(change)
    }

    /// Receive every future change; dropping the receiver unsubscribes
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChange> {
        self.changes.subscribe()
    }

    fn publish(&self, change: &ConfigChange) {
        if change.is_empty() {
            return;
        }
        tracing::debug!(?change, "settings changed");
        // no subscribers is fine
        let _ = self.changes.send(change.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::open(dir.path().join("nested").join("konnyaku.toml")).unwrap()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let config = store.get().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.target_language, "zh-TW");
        assert!(config.ui_language.is_none());
    }

    #[test]
    fn test_set_persists_only_given_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set(&ConfigPatch {
                api_key: Some("  key-123 ".to_string()),
                ..Default::default()
            })
            .unwrap();
        store
            .set(&ConfigPatch {
                target_language: Some("ja".to_string()),
                ..Default::default()
            })
            .unwrap();

        let reopened = ConfigStore::open(store.path()).unwrap().get().unwrap();
        assert_eq!(reopened.api_key, "key-123");
        assert_eq!(reopened.target_language, "ja");
        assert!(reopened.preferred_languages.is_empty());
    }

    #[test]
    fn test_file_uses_storage_key_names() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set(&ConfigPatch {
                preferred_languages: Some(vec!["ja".to_string(), "ko".to_string()]),
                ui_language: Some("ko".to_string()),
                ..Default::default()
            })
            .unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("preferredLanguages"));
        assert!(content.contains("uiLanguage = \"ko\""));
        assert!(content.contains("targetLanguage"));
    }

    #[test]
    fn test_subscribers_see_changes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut rx = store.subscribe();

        let change = store
            .set(&ConfigPatch {
                ui_language: Some("ja".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(change.ui_language, Some(Some("ja".to_string())));
        assert_eq!(rx.try_recv().unwrap(), change);

        // same value again: nothing changed, nothing published
        let change = store
            .set(&ConfigPatch {
                ui_language: Some("ja".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(change.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_empty_ui_language_removes_override() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set(&ConfigPatch {
                ui_language: Some("ja".to_string()),
                ..Default::default()
            })
            .unwrap();
        let change = store
            .set(&ConfigPatch {
                ui_language: Some(String::new()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(change.ui_language, Some(None));
        assert_eq!(store.ui_language().unwrap(), None);
    }

    #[test]
    fn test_clear_resets_and_removes_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set(&ConfigPatch {
                api_key: Some("abc".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(store.path().exists());

        let change = store.clear().unwrap();
        assert_eq!(change.api_key, Some(String::new()));
        assert!(!store.path().exists());
        assert_eq!(store.get().unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("konnyaku.toml");
        std::fs::write(&path, "apiKey = [not toml").unwrap();
        assert!(ConfigStore::open(&path).is_err());
    }

    #[test]
    fn test_merge_runtime_args() {
        let config = Config {
            target_language: "ja".to_string(),
            ..Default::default()
        };
        let merged = config.merge_runtime_args(&RuntimeArgs {
            target_language: Some("fr".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.target_language, "fr");
        assert!(merged.api_key.is_empty());
    }

    #[test]
    fn test_command_line_key_wins_over_saved_key() {
        let config = Config {
            api_key: "saved-key".to_string(),
            ..Default::default()
        };
        let merged = config.merge_runtime_args(&RuntimeArgs {
            api_key: Some("cli-key".to_string()),
            env_api_key: Some("env-key".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.api_key, "cli-key");
    }

    #[test]
    fn test_environment_key_only_fills_missing_key() {
        let env = RuntimeArgs {
            env_api_key: Some("env-key".to_string()),
            ..Default::default()
        };

        let saved = Config {
            api_key: "saved-key".to_string(),
            ..Default::default()
        };
        assert_eq!(saved.merge_runtime_args(&env).api_key, "saved-key");

        let unsaved = Config::default();
        assert_eq!(unsaved.merge_runtime_args(&env).api_key, "env-key");
    }
}
