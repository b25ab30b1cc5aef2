// ============================================================================
// Konnyaku - 翻译目标语言
// ============================================================================
//
// 文件: src/translation/languages.rs
// 职责: 可翻译的目标语言及其显示名称
// 边界:
//   - ✅ 目标语言表 (代码、英文名、本地名)
//   - ✅ 以界面语言显示名称
//   - ✅ 按用户偏好语言过滤
//   - ❌ 不应包含 API 调用
//   - ❌ 不应读取设置
//
// ============================================================================

use serde::Serialize;

use crate::i18n::{Localizer, Params};

/// Target language used until the user picks one
pub const DEFAULT_TARGET_LANGUAGE: &str = "zh-TW";

/// A language the translation service can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    pub code: &'static str,
    pub english_name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, english_name: &'static str, native_name: &'static str) -> TargetLanguage {
    TargetLanguage {
        code,
        english_name,
        native_name,
    }
}

pub const TARGET_LANGUAGES: &[TargetLanguage] = &[
    lang("zh-TW", "Traditional Chinese", "繁體中文"),
    lang("zh-CN", "Simplified Chinese", "简体中文"),
    lang("ja", "Japanese", "日本語"),
    lang("ko", "Korean", "한국어"),
    lang("en", "English", "English"),
    lang("es", "Spanish", "Español"),
    lang("fr", "French", "Français"),
    lang("de", "German", "Deutsch"),
    lang("it", "Italian", "Italiano"),
    lang("pt", "Portuguese", "Português"),
    lang("ru", "Russian", "Русский"),
    lang("ar", "Arabic", "العربية"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("th", "Thai", "ไทย"),
    lang("vi", "Vietnamese", "Tiếng Việt"),
];

pub fn find(code: &str) -> Option<&'static TargetLanguage> {
    TARGET_LANGUAGES.iter().find(|language| language.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// English name for prompts; unknown codes are returned as-is
pub fn english_name(code: &str) -> &str {
    find(code).map(|language| language.english_name).unwrap_or(code)
}

/// Name of `code` in the interface language, optionally followed by its native name.
///
/// `language_name(ja, "ko", true)` gives `韓国語(한국어)`. The native suffix is
/// omitted when it would repeat the translated name.
pub fn language_name(localizer: &mut Localizer, code: &str, include_native: bool) -> String {
    let translated = localizer
        .try_translate(&format!("languages.{}", code), &Params::new())
        .ok()
        .or_else(|| find(code).map(|language| language.english_name.to_string()))
        .unwrap_or_else(|| code.to_string());

    match find(code) {
        Some(language) if include_native && language.native_name != translated => {
            format!("{}({})", translated, language.native_name)
        }
        _ => translated,
    }
}

/// One entry of the language picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: String,
}

/// Every target language, named in the interface language
pub fn available_languages(localizer: &mut Localizer, include_native: bool) -> Vec<LanguageOption> {
    TARGET_LANGUAGES
        .iter()
        .map(|language| LanguageOption {
            code: language.code,
            name: language_name(localizer, language.code, include_native),
        })
        .collect()
}

/// Keep only the preferred languages; no preference keeps everything
pub fn filter_by_preference(all: Vec<LanguageOption>, preferred: &[String]) -> Vec<LanguageOption> {
    if preferred.is_empty() {
        return all;
    }
    all.into_iter()
        .filter(|option| preferred.iter().any(|code| code == option.code))
        .collect()
}
