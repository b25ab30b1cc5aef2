// ============================================================================
// Konnyaku - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 面向用户的控制台消息与诊断日志初始化
// 边界:
//   - ✅ 面向用户的彩色状态行
//   - ✅ tracing 订阅器初始化
//   - ✅ 颜色开关处理
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志
//   - ❌ 不应自行生成消息文本
//
// ============================================================================

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use super::constants::{icons, APP_NAME, LOG_ENV};

/// Console message helper
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", format!("[{}]", APP_NAME).cyan(), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", format!("[{}]", icons::WARNING).yellow(), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", format!("[{}]", icons::ERROR).red(), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", format!("[{}]", icons::SUCCESS).green(), msg.as_ref());
    }

    /// Informational line on stderr, for commands whose stdout is data
    pub fn status<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", format!("[{}]", APP_NAME).cyan(), msg.as_ref());
    }
}

/// Turn colors off for `--no-color` or when stdout is not a terminal.
pub fn configure_colors(no_color: bool) {
    if no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

/// Install the diagnostic subscriber (stderr).
///
/// `KONNYAKU_LOG` takes precedence; otherwise `--verbose` selects `debug`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "konnyaku=debug" } else { "konnyaku=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
