// ============================================================================
// Konnyaku - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 界面本地化：语言表、查找、检测
// 边界:
//   - ✅ 子模块组织和导出
//   - ✅ 查找错误类型
//   - ✅ 翻译宏
//   - ❌ 不应包含翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 CLI 逻辑
//
// ============================================================================

pub mod cache;
pub mod interpolate;
pub mod locale;
pub mod localizer;
pub mod store;
pub mod tree;

pub mod en;
pub mod ja;
pub mod ko;
pub mod zh_cn;
pub mod zh_tw;

pub use cache::{FifoCache, DEFAULT_CACHE_CAPACITY};
pub use interpolate::{interpolate, Params};
pub use locale::{detect, environment_locale, LocaleCode};
pub use localizer::{BatchItem, CacheStats, Localizer};
pub use store::LocaleStore;
pub use tree::{parse_path, resolve, LocaleNode};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("missing translation for '{key}' (locale {locale})")]
    MissingKey { key: String, locale: LocaleCode },

    #[error("translation key '{key}' names a group of strings, not a string (locale {locale})")]
    NotALeaf { key: String, locale: LocaleCode },

    #[error("unsupported interface language: {0}")]
    UnsupportedLocale(String),

    #[error("locale store has no table for fallback locale {0}")]
    MissingFallback(LocaleCode),
}

/// Simple translation macro
///
/// `t!(localizer, "settings.title")`
#[macro_export]
macro_rules! t {
    ($l:expr, $key:expr) => {
        $l.translate($key)
    };
}

/// Translation with named parameters
///
/// `tf!(localizer, "errors.textTooLong", length = 6000, max = 5000)`
#[macro_export]
macro_rules! tf {
    ($l:expr, $key:expr, $($name:ident = $value:expr),+ $(,)?) => {{
        let params = $crate::i18n::Params::new()$(.with(stringify!($name), $value))+;
        $l.translate_with($key, &params)
    }};
}
