// ============================================================================
// Konnyaku - 本地化器
// ============================================================================
//
// 文件: src/i18n/localizer.rs
// 职责: 带回退语言、插值和有界缓存的键查找
// 边界:
//   - ✅ 当前语言状态 (每个进程一个实例)
//   - ✅ 回退语言查找策略
//   - ✅ 路径缓存和翻译缓存
//   - ✅ 语言切换与缓存失效
//   - ❌ 不应包含翻译内容
//   - ❌ 不应读写设置
//   - ❌ 不应负责输出
//
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use super::cache::{FifoCache, DEFAULT_CACHE_CAPACITY};
use super::interpolate::{interpolate, Params};
use super::locale::{detect, LocaleCode};
use super::store::LocaleStore;
use super::tree::{resolve, LocaleNode};
use super::I18nError;

/// Snapshot of cache occupancy and hit rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub path_cache_size: usize,
    pub translation_cache_size: usize,
    pub max_cache_size: usize,
    pub hits: u64,
    pub misses: u64,
}

/// One entry of a [`Localizer::batch_translate`] call.
#[derive(Debug, Clone)]
pub enum BatchItem<'a> {
    Key(&'a str),
    WithParams(&'a str, Params),
}

impl<'a> BatchItem<'a> {
    fn key(&self) -> &'a str {
        match self {
            BatchItem::Key(key) | BatchItem::WithParams(key, _) => key,
        }
    }
}

impl<'a> From<&'a str> for BatchItem<'a> {
    fn from(key: &'a str) -> Self {
        BatchItem::Key(key)
    }
}

/// Translates interface strings for the active locale.
///
/// Each process owns its own instance; nothing is shared through globals.
#[derive(Debug)]
pub struct Localizer {
    store: LocaleStore,
    active: LocaleCode,
    path_cache: FifoCache<String, Arc<[String]>>,
    translation_cache: FifoCache<String, String>,
}

impl Localizer {
    /// Build a localizer over `store`, which must contain the fallback table.
    pub fn new(store: LocaleStore, active: LocaleCode) -> Result<Self, I18nError> {
        if !store.contains(LocaleCode::FALLBACK) {
            return Err(I18nError::MissingFallback(LocaleCode::FALLBACK));
        }
        if !store.contains(active) {
            return Err(I18nError::UnsupportedLocale(active.to_string()));
        }
        Ok(Self::from_parts(store, active, DEFAULT_CACHE_CAPACITY))
    }

    /// Localizer over the bundled tables.
    pub fn builtin(active: LocaleCode) -> Self {
        Self::from_parts(LocaleStore::builtin(), active, DEFAULT_CACHE_CAPACITY)
    }

    /// Localizer for the saved interface language, or the environment locale.
    ///
    /// A failed settings load is logged and treated as "no override".
    pub fn bootstrap(persisted: anyhow::Result<Option<String>>, reported: &str) -> Self {
        let persisted = match persisted {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to load saved interface language: {:#}", e);
                None
            }
        };
        let active = detect(reported, persisted.as_deref());
        tracing::debug!(
            reported,
            persisted = persisted.as_deref().unwrap_or("-"),
            %active,
            "interface language resolved"
        );
        Self::builtin(active)
    }

    fn from_parts(store: LocaleStore, active: LocaleCode, capacity: usize) -> Self {
        Self {
            store,
            active,
            path_cache: FifoCache::new(capacity),
            translation_cache: FifoCache::new(capacity),
        }
    }

    /// Replace both caches with empty ones bounded by `capacity`.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.path_cache = FifoCache::new(capacity);
        self.translation_cache = FifoCache::new(capacity);
        self
    }

    pub fn active_locale(&self) -> LocaleCode {
        self.active
    }

    pub fn supported_locales(&self) -> Vec<LocaleCode> {
        self.store.locales().collect()
    }

    /// Switch the active locale and drop both caches.
    ///
    /// Unsupported codes leave the locale and caches untouched and return `false`.
    pub fn set_active_locale(&mut self, code: &str) -> bool {
        let Some(locale) = LocaleCode::parse(code).filter(|locale| self.store.contains(*locale)) else {
            tracing::debug!(code, "ignoring unsupported interface language");
            return false;
        };

        self.active = locale;
        self.clear_caches();
        tracing::debug!(%locale, "interface language switched");
        true
    }

    /// Follow a change of the saved interface language.
    ///
    /// A cleared override falls back to detecting from `reported`.
    pub fn apply_ui_language(&mut self, ui_language: Option<&str>, reported: &str) -> bool {
        let target = detect(reported, ui_language);
        if target == self.active {
            return false;
        }
        self.set_active_locale(target.as_str())
    }

    /// Translate `key`; missing keys come back verbatim.
    pub fn translate(&mut self, key: &str) -> String {
        self.translate_with(key, &Params::new())
    }

    /// Translate `key` and fill in `{name}` placeholders from `params`.
    pub fn translate_with(&mut self, key: &str, params: &Params) -> String {
        match self.try_translate(key, params) {
            Ok(text) => text,
            Err(e @ I18nError::NotALeaf { .. }) => {
                tracing::warn!("{}", e);
                key.to_string()
            }
            Err(e) => {
                tracing::debug!("{}", e);
                key.to_string()
            }
        }
    }

    /// Translation lookup that reports why a key could not be rendered.
    pub fn try_translate(&mut self, key: &str, params: &Params) -> Result<String, I18nError> {
        let cache_key = format!("{}:{}", self.active, key);
        if params.is_empty() {
            if let Some(cached) = self.translation_cache.get(&cache_key) {
                return Ok(cached.clone());
            }
        }

        let path = self.parse_path(key);
        let mut node = self.lookup(self.active, &path);
        if node.is_none() && self.active != LocaleCode::FALLBACK {
            tracing::debug!(key, locale = %self.active, "using fallback translation");
            node = self.lookup(LocaleCode::FALLBACK, &path);
        }

        let text = match node {
            Some(LocaleNode::Leaf(text)) => *text,
            Some(LocaleNode::Branch(_)) => {
                return Err(I18nError::NotALeaf {
                    key: key.to_string(),
                    locale: self.active,
                })
            }
            None => {
                return Err(I18nError::MissingKey {
                    key: key.to_string(),
                    locale: self.active,
                })
            }
        };

        if !params.is_empty() {
            return Ok(interpolate(text, params));
        }

        self.translation_cache.insert(cache_key, text.to_string());
        Ok(text.to_string())
    }

    /// Whether `locale`'s own table has a leaf or subtree at `key` (no fallback).
    pub fn has_translation(&mut self, locale: LocaleCode, key: &str) -> bool {
        let path = self.parse_path(key);
        self.lookup(locale, &path).is_some()
    }

    /// Translate several keys at once, keyed by translation key.
    pub fn batch_translate<'a, I>(&mut self, items: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = BatchItem<'a>>,
    {
        let mut results = BTreeMap::new();
        for item in items {
            let text = match &item {
                BatchItem::Key(key) => self.translate(key),
                BatchItem::WithParams(key, params) => self.translate_with(key, params),
            };
            results.insert(item.key().to_string(), text);
        }
        results
    }

    pub fn clear_caches(&mut self) {
        self.path_cache.clear();
        self.translation_cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            path_cache_size: self.path_cache.len(),
            translation_cache_size: self.translation_cache.len(),
            max_cache_size: self.translation_cache.capacity(),
            hits: self.translation_cache.hits(),
            misses: self.translation_cache.misses(),
        }
    }

    /// Whether a zero-parameter lookup of `key` under the active locale is cached.
    pub fn is_cached(&self, key: &str) -> bool {
        self.translation_cache.contains(&format!("{}:{}", self.active, key))
    }

    fn parse_path(&mut self, key: &str) -> Arc<[String]> {
        if let Some(path) = self.path_cache.get(key) {
            return Arc::clone(path);
        }
        let path: Arc<[String]> = key.split('.').map(str::to_string).collect();
        self.path_cache.insert(key.to_string(), Arc::clone(&path));
        path
    }

    fn lookup(&self, locale: LocaleCode, path: &[String]) -> Option<&'static LocaleNode> {
        self.store.get(locale).and_then(|table| resolve(table, path))
    }
}
