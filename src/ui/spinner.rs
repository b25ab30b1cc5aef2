// ============================================================================
// Konnyaku - Spinner 加载动画组件
// ============================================================================
//
// 文件: src/ui/spinner.rs
// 职责: 请求进行中的终端加载动画
// 边界:
//   - ✅ 加载动画显示和清理
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应自行决定文本 (由调用方传入本地化消息)
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::utils::constants::spinner_chars;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner drawn on stderr; it stays hidden when stderr is not a terminal
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start spinning with `message` next to the frames
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }

    fn style() -> ProgressStyle {
        // the last tick string is shown once finished
        let mut frames: Vec<&str> = spinner_chars::BASE.to_vec();
        frames.push(" ");

        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&frames)
    }

    /// Stop and erase the spinner line
    pub fn stop(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
