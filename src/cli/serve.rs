// ============================================================================
// Konnyaku - 服务命令
// ============================================================================
//
// 文件: src/cli/serve.rs
// 职责: 基于 stdin/stdout 的逐行 JSON 请求循环
// 边界:
//   - ✅ 读取请求并写出回复，每行一个 JSON 对象
//   - ✅ 运行期间跟随界面语言变更
//   - ❌ 不应包含请求处理逻辑
//   - ❌ stdout 上不应输出回复以外的内容
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use super::Context;
use crate::i18n::Localizer;
use crate::translation::gemini::{GeminiClient, TranslationBackend};
use crate::translation::handler::MessageHandler;
use crate::utils::logger::Logger;
use crate::{t, tf};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Gemini API base URL
    #[arg(long, hide = true)]
    pub base_url: Option<String>,
}

pub async fn handle_serve(args: ServeArgs, ctx: &mut Context) -> Result<()> {
    let store = ctx.store()?;
    let mut client = GeminiClient::new();
    if let Some(url) = &args.base_url {
        client = client.with_base_url(url.as_str());
    }
    let handler = MessageHandler::new(client, store, ctx.runtime.clone());

    Logger::status(t!(ctx.localizer, "cli.serve.ready"));

    let session = Session {
        follow_settings: ctx.runtime.ui_language.is_none(),
        reported_locale: ctx.reported_locale.clone(),
    };
    let input = BufReader::new(io::stdin());
    let mut output = io::stdout();
    let count = session.run(&handler, &mut ctx.localizer, input, &mut output).await?;

    Logger::status(tf!(ctx.localizer, "cli.serve.stopped", count = count));
    Ok(())
}

/// One request loop over a reader/writer pair
struct Session {
    /// Switch the interface language when the saved one changes
    follow_settings: bool,
    reported_locale: String,
}

impl Session {
    /// Answer requests until `input` is closed; returns how many were answered
    async fn run<B, R, W>(
        &self,
        handler: &MessageHandler<B>,
        localizer: &mut Localizer,
        input: R,
        output: &mut W,
    ) -> Result<usize>
    where
        B: TranslationBackend,
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut changes = handler.store().subscribe();
        let mut watching = self.follow_settings;
        let mut count = 0;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if line.trim().is_empty() {
                        continue;
                    }

                    let reply = handler.handle_json(&line, localizer).await;
                    output.write_all(reply.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    output.flush().await?;
                    count += 1;

                    // a save in this request is applied before the next one is read
                    while watching {
                        match changes.try_recv() {
                            Ok(change) => self.apply(localizer, change.ui_language),
                            Err(_) => break,
                        }
                    }
                }
                change = changes.recv(), if watching => match change {
                    Ok(change) => self.apply(localizer, change.ui_language),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "missed settings changes");
                        let saved = handler.store().ui_language()?;
                        self.apply(localizer, Some(saved));
                    }
                    Err(RecvError::Closed) => watching = false,
                },
            }
        }

        Ok(count)
    }

    fn apply(&self, localizer: &mut Localizer, ui_language: Option<Option<String>>) {
        if let Some(ui_language) = ui_language {
            if localizer.apply_ui_language(ui_language.as_deref(), &self.reported_locale) {
                tracing::info!(locale = %localizer.active_locale(), "interface language changed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use crate::models::config::{ConfigStore, RuntimeArgs};
    use crate::translation::gemini::TranslateError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct Upper;

    #[async_trait]
    impl TranslationBackend for Upper {
        async fn translate(&self, text: &str, _target: &str, _api_key: &str) -> Result<String, TranslateError> {
            Ok(text.to_uppercase())
        }
    }

    fn handler(dir: &TempDir) -> MessageHandler<Upper> {
        let store = ConfigStore::open(dir.path().join("konnyaku.toml")).unwrap();
        let runtime = RuntimeArgs {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        MessageHandler::new(Upper, Arc::new(store), runtime)
    }

    async fn run(session: &Session, handler: &MessageHandler<Upper>, l: &mut Localizer, input: &str) -> (usize, Vec<String>) {
        let mut output = Vec::new();
        let count = session.run(handler, l, input.as_bytes(), &mut output).await.unwrap();
        let lines = String::from_utf8(output).unwrap().lines().map(str::to_string).collect();
        (count, lines)
    }

    #[tokio::test]
    async fn test_session_answers_each_line() {
        let dir = TempDir::new().unwrap();
        let handler = handler(&dir);
        let session = Session {
            follow_settings: true,
            reported_locale: "en-US".to_string(),
        };
        let mut l = Localizer::builtin(LocaleCode::En);

        let input = "{\"action\":\"translate\",\"text\":\"hi\"}\n\n{\"action\":\"nope\"}\n";
        let (count, lines) = run(&session, &handler, &mut l, input).await;
        assert_eq!(count, 2);
        assert_eq!(lines, vec![r#"{"translation":"HI"}"#, r#"{"error":"Unknown action"}"#]);
    }

    #[tokio::test]
    async fn test_session_follows_saved_ui_language() {
        let dir = TempDir::new().unwrap();
        let handler = handler(&dir);
        let session = Session {
            follow_settings: true,
            reported_locale: "en-US".to_string(),
        };
        let mut l = Localizer::builtin(LocaleCode::En);

        let input = concat!(
            "{\"action\":\"saveSettings\",\"settings\":{\"uiLanguage\":\"ja\"}}\n",
            "{\"action\":\"translate\",\"text\":\"\"}\n",
        );
        let (_, lines) = run(&session, &handler, &mut l, input).await;
        assert_eq!(lines[0], r#"{"success":true}"#);
        assert_eq!(lines[1], r#"{"error":"翻訳するテキストを指定してください"}"#);
        assert_eq!(l.active_locale(), LocaleCode::Ja);
    }

    #[tokio::test]
    async fn test_session_keeps_pinned_language() {
        let dir = TempDir::new().unwrap();
        let handler = handler(&dir);
        let session = Session {
            follow_settings: false,
            reported_locale: "en-US".to_string(),
        };
        let mut l = Localizer::builtin(LocaleCode::Ko);

        let input = "{\"action\":\"saveSettings\",\"settings\":{\"uiLanguage\":\"ja\"}}\n";
        run(&session, &handler, &mut l, input).await;
        assert_eq!(l.active_locale(), LocaleCode::Ko);
    }
}
