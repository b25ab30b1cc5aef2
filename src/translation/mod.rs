// ============================================================================
// Konnyaku - 翻译模块
// ============================================================================
//
// 文件: src/translation/mod.rs
// 职责: 翻译后端、请求处理与目标语言
// 边界:
//   - ✅ 子模块组织和导出
//   - ❌ 不应包含界面文本
//   - ❌ 不应包含 CLI 逻辑
//
// ============================================================================

pub mod gemini;
pub mod handler;
pub mod languages;

pub use gemini::{validate_api_key, GeminiClient, TranslateError, TranslationBackend};
pub use handler::{perform_translation, MessageHandler, Request, Response};
pub use languages::{LanguageOption, TargetLanguage, DEFAULT_TARGET_LANGUAGE, TARGET_LANGUAGES};
