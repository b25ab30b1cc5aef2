// ============================================================================
// Konnyaku - 翻译命令
// ============================================================================
//
// 文件: src/cli/translate.rs
// 职责: 命令行单次翻译
// 边界:
//   - ✅ 命令参数解析
//   - ✅ 请求期间显示加载动画
//   - ✅ 输出译文或本地化错误
//   - ❌ 不应包含请求校验逻辑
//   - ❌ 不应包含 HTTP 细节
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::Context;
use crate::translation::gemini::GeminiClient;
use crate::translation::handler::{perform_translation, MessageHandler, Request};
use crate::translation::languages;
use crate::ui::spinner::Spinner;
use crate::utils::logger::Logger;
use crate::{t, tf};

#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Text to translate (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Target language code for this translation
    #[arg(short, long)]
    pub to: Option<String>,

    /// Gemini API base URL
    #[arg(long, hide = true)]
    pub base_url: Option<String>,
}

pub async fn handle_translate(args: TranslateArgs, ctx: &mut Context) -> Result<()> {
    let store = ctx.store()?;
    let mut client = GeminiClient::new();
    if let Some(url) = &args.base_url {
        client = client.with_base_url(url.as_str());
    }
    let handler = MessageHandler::new(client, store, ctx.runtime.clone());

    if let Some(code) = &args.to {
        if !languages::is_supported(code) {
            anyhow::bail!(tf!(ctx.localizer, "cli.config.unsupportedTarget", code = code));
        }
    }

    if ctx.verbose {
        let target = match &args.to {
            Some(code) => code.clone(),
            None => ctx.effective_config()?.target_language,
        };
        let language = languages::language_name(&mut ctx.localizer, &target, true);
        Logger::status(tf!(ctx.localizer, "cli.translate.target", language = language));
    }

    let request = Request::Translate {
        text: args.text.join(" "),
        target_language: args.to,
    };

    let spinner = Spinner::start(t!(ctx.localizer, "translating"));
    let response = handler.handle(request, &mut ctx.localizer).await;
    spinner.stop();

    match perform_translation(Ok(response), &mut ctx.localizer) {
        Ok(translation) => {
            println!("{}", translation);
            Ok(())
        }
        Err(message) => anyhow::bail!("{} {}", t!(ctx.localizer, "error"), message),
    }
}
