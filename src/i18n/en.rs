// ============================================================================
// Konnyaku - 英文翻译表
// ============================================================================
//
// 文件: src/i18n/en.rs
// 职责: 英文翻译字符串；作为回退表，包含全部键
// 边界:
//   - ✅ 英文翻译字符串定义
//   - ✅ 翻译键结构维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

use super::tree::LocaleNode::{self, Branch, Leaf};

/// English translation table
pub static TRANSLATIONS: LocaleNode = Branch(&[
    // Settings page
    (
        "settings",
        Branch(&[
            ("title", Leaf("Konnyaku Settings")),
            (
                "apiKey",
                Branch(&[
                    ("label", Leaf("Gemini API Key")),
                    ("placeholder", Leaf("Enter your Gemini API key")),
                    ("help", Leaf("Get your API key from")),
                    ("helpLink", Leaf("Google AI Studio")),
                    ("invalidFormat", Leaf("This does not look like a Gemini API key (expected \"AIza\" followed by 35 characters)")),
                ]),
            ),
            (
                "targetLanguage",
                Branch(&[
                    ("label", Leaf("Current Target Language")),
                    ("help", Leaf("Change target language in the translation popup when translating text")),
                ]),
            ),
            (
                "preferredLanguages",
                Branch(&[
                    ("label", Leaf("Preferred Languages")),
                    ("help", Leaf("Select which languages you want to see in the translation popup dropdown")),
                    ("all", Leaf("All languages")),
                ]),
            ),
            (
                "uiLanguage",
                Branch(&[
                    ("label", Leaf("Interface Language")),
                    ("auto", Leaf("Follow system ({locale})")),
                ]),
            ),
            ("saveButton", Leaf("Save Settings")),
            ("saveSuccess", Leaf("Settings saved successfully!")),
            ("saveError", Leaf("Failed to save settings")),
            ("notSet", Leaf("Not set")),
        ]),
    ),
    // Language names
    (
        "languages",
        Branch(&[
            ("zh-TW", Leaf("Traditional Chinese")),
            ("zh-CN", Leaf("Simplified Chinese")),
            ("ja", Leaf("Japanese")),
            ("ko", Leaf("Korean")),
            ("en", Leaf("English")),
            ("es", Leaf("Spanish")),
            ("fr", Leaf("French")),
            ("de", Leaf("German")),
            ("it", Leaf("Italian")),
            ("pt", Leaf("Portuguese")),
            ("ru", Leaf("Russian")),
            ("ar", Leaf("Arabic")),
            ("hi", Leaf("Hindi")),
            ("th", Leaf("Thai")),
            ("vi", Leaf("Vietnamese")),
        ]),
    ),
    // Translation popup
    ("translating", Leaf("Translating...")),
    ("error", Leaf("Error:")),
    ("failedToTranslate", Leaf("Failed to translate text")),
    ("playAudio", Leaf("Play audio")),
    ("audioGenerationFailed", Leaf("Failed to generate audio")),
    ("audioPlaybackFailed", Leaf("Failed to play audio")),
    // Translation request errors
    (
        "errors",
        Branch(&[
            ("emptyText", Leaf("Please provide some text to translate")),
            ("textTooLong", Leaf("Text is too long ({length} characters, maximum {max}). Please select a shorter passage.")),
            ("missingApiKey", Leaf("Please configure your API key in the settings first")),
            ("invalidApiKey", Leaf("The API key is invalid or has expired")),
            ("forbidden", Leaf("The API key is not allowed to access this service")),
            ("rateLimited", Leaf("Too many requests, please try again later")),
            ("serviceUnavailable", Leaf("The translation service is temporarily unavailable, please try again later")),
            ("unknown", Leaf("An unknown error occurred")),
            ("network", Leaf("Cannot reach the translation service, please check your network connection")),
            ("invalidResponse", Leaf("The translation service returned an unexpected response")),
            ("unknownAction", Leaf("Unknown action")),
            ("apiError", Leaf("API error ({status}): {message}")),
        ]),
    ),
    // Command line
    (
        "cli",
        Branch(&[
            (
                "config",
                Branch(&[
                    ("path", Leaf("Settings file: {path}")),
                    ("cleared", Leaf("All settings cleared")),
                    ("nothingToSave", Leaf("No settings given; nothing to save")),
                    ("unsupportedTarget", Leaf("Unsupported target language: {code}")),
                    ("unsupportedUiLanguage", Leaf("Unsupported interface language: {code} (supported: {supported})")),
                    ("loadFailed", Leaf("Failed to load settings: {error}")),
                ]),
            ),
            (
                "languages",
                Branch(&[
                    ("header", Leaf("Translation languages")),
                    ("current", Leaf("current target")),
                ]),
            ),
            (
                "locale",
                Branch(&[
                    ("reported", Leaf("Environment locale: {locale}")),
                    ("persisted", Leaf("Saved interface language: {locale}")),
                    ("detected", Leaf("Interface language: {locale}")),
                    ("missing", Leaf("No translation found for '{key}'")),
                    ("stats", Leaf("Path cache: {paths}, translation cache: {entries}/{max}, hits: {hits}, misses: {misses}")),
                ]),
            ),
            (
                "translate",
                Branch(&[
                    ("target", Leaf("Target language: {language}")),
                ]),
            ),
            (
                "serve",
                Branch(&[
                    ("ready", Leaf("Waiting for requests on standard input")),
                    ("stopped", Leaf("Input closed after {count} requests")),
                ]),
            ),
        ]),
    ),
]);
