// ============================================================================
// Konnyaku - 语言列表命令
// ============================================================================
//
// 文件: src/cli/languages.rs
// 职责: 以界面语言列出可翻译的目标语言
// 边界:
//   - ✅ 按偏好语言过滤并标记当前目标语言
//   - ❌ 不应修改设置
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::Context;
use crate::t;
use crate::translation::languages::{available_languages, filter_by_preference};
use crate::utils::constants::icons;
use crate::utils::logger::Logger;

#[derive(Debug, Args)]
pub struct LanguagesArgs {
    /// Ignore the preferred-language filter
    #[arg(short, long)]
    pub all: bool,

    /// Append each language's own name
    #[arg(short, long)]
    pub native: bool,
}

pub fn handle_languages(args: LanguagesArgs, ctx: &mut Context) -> Result<()> {
    let config = ctx.effective_config()?;

    let mut options = available_languages(&mut ctx.localizer, args.native);
    if !args.all {
        options = filter_by_preference(options, &config.preferred_languages);
    }

    Logger::info(t!(ctx.localizer, "cli.languages.header"));
    let current_label = t!(ctx.localizer, "cli.languages.current");
    for option in options {
        if option.code == config.target_language {
            println!(
                "  {} {:<6} {} ({})",
                icons::CURRENT.green(),
                option.code,
                option.name.bold(),
                current_label
            );
        } else {
            println!("  {} {:<6} {}", icons::OTHER, option.code, option.name);
        }
    }
    Ok(())
}
