// ============================================================================
// Konnyaku - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用级常量
// 边界:
//   - ✅ 应用名称与文件位置
//   - ✅ 环境变量名称
//   - ✅ 请求限制与 API 默认地址
//   - ✅ 终端符号
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// Application name constant
pub const APP_NAME: &str = "KONNYAKU";

/// Directory under the platform config dir holding the settings file
pub const APP_DIR_NAME: &str = "konnyaku";

/// Settings file name
pub const CONFIG_FILE_NAME: &str = "konnyaku.toml";

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable holding the log filter (tracing `EnvFilter` syntax)
pub const LOG_ENV: &str = "KONNYAKU_LOG";

/// Longest text accepted for a single translation request, in characters
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Gemini API defaults
pub mod api {
    pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const MODEL_NAME: &str = "gemini-2.5-flash-lite-preview-06-17";
}

/// Terminal symbols
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "!";
    pub const CURRENT: &str = "●";
    pub const OTHER: &str = "○";
}

/// Spinner frames
pub mod spinner_chars {
    pub const BASE: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
}
