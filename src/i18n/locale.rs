// ============================================================================
// Konnyaku - 界面语言与检测
// ============================================================================
//
// 文件: src/i18n/locale.rs
// 职责: 支持的界面语言代码及当前语言检测
// 边界:
//   - ✅ 封闭的界面语言代码集合
//   - ✅ 已保存覆盖值 / 环境语言解析
//   - ✅ 环境语言获取
//   - ❌ 不应包含翻译查找
//   - ❌ 不应读写设置
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::I18nError;

/// Interface languages with a full set of translated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocaleCode {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
}

impl LocaleCode {
    /// Locale whose table holds every key.
    pub const FALLBACK: LocaleCode = LocaleCode::En;

    /// Locale used when detection finds nothing better.
    pub const DEFAULT: LocaleCode = LocaleCode::En;

    pub fn all() -> &'static [LocaleCode] {
        &[
            LocaleCode::En,
            LocaleCode::ZhTw,
            LocaleCode::ZhCn,
            LocaleCode::Ja,
            LocaleCode::Ko,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::ZhTw => "zh-TW",
            LocaleCode::ZhCn => "zh-CN",
            LocaleCode::Ja => "ja",
            LocaleCode::Ko => "ko",
        }
    }

    /// Exact, case-sensitive match against the supported codes.
    pub fn parse(code: &str) -> Option<LocaleCode> {
        Self::all().iter().copied().find(|locale| locale.as_str() == code)
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleCode::parse(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the interface locale from the environment locale and a saved override.
///
/// First match wins: a supported override, an exact match, the primary subtag,
/// the Chinese script/region heuristic, then [`LocaleCode::DEFAULT`].
pub fn detect(reported: &str, persisted: Option<&str>) -> LocaleCode {
    if let Some(code) = persisted.and_then(LocaleCode::parse) {
        return code;
    }

    if let Some(code) = LocaleCode::parse(reported) {
        return code;
    }

    let primary = reported.split('-').next().unwrap_or(reported);
    if let Some(code) = LocaleCode::parse(primary) {
        return code;
    }

    if reported.starts_with("zh") {
        let upper = reported.to_ascii_uppercase();
        return if ["TW", "HK", "MO"].iter().any(|region| upper.contains(region)) {
            LocaleCode::ZhTw
        } else {
            LocaleCode::ZhCn
        };
    }

    LocaleCode::DEFAULT
}

/// Locale string reported when the environment gives us nothing.
pub const DEFAULT_ENVIRONMENT_LOCALE: &str = "en-US";

/// The user's ambient locale as a BCP 47-style tag (e.g. `en-US`, `zh-TW`).
pub fn environment_locale() -> String {
    sys_locale::get_locale()
        .map(|raw| normalize_locale_tag(&raw))
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT_LOCALE.to_string())
}

/// Turn POSIX-style values such as `zh_TW.UTF-8` or `de_DE@euro` into `zh-TW` / `de-DE`.
pub fn normalize_locale_tag(raw: &str) -> String {
    let base = raw.split(['.', '@']).next().unwrap_or(raw).trim();
    if base == "C" || base == "POSIX" {
        return String::new();
    }
    base.replace('_', "-")
}
