// ============================================================================
// Konnyaku - 配置命令
// ============================================================================
//
// 文件: src/cli/config.rs
// 职责: 查看、修改和清除已保存的设置
// 边界:
//   - ✅ 使用本地化标签显示设置
//   - ✅ 从命令行参数构建设置补丁
//   - ✅ 保存成功/失败提示
//   - ❌ 不应包含设置文件格式定义
//   - ❌ 不应包含校验规则
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use super::Context;
use crate::i18n::{detect, Localizer};
use crate::models::config::{Config, ConfigPatch};
use crate::translation::handler::validate_patch;
use crate::translation::languages::language_name;
use crate::utils::logger::Logger;
use crate::{t, tf};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the saved settings
    Show,
    /// Change one or more settings
    Set(SetArgs),
    /// Remove the settings file
    Clear,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Gemini API key ("" removes it)
    #[arg(long = "key")]
    pub api_key: Option<String>,

    /// Default target language code
    #[arg(long)]
    pub target: Option<String>,

    /// Languages offered in the picker, comma separated ("" shows all)
    #[arg(long, value_delimiter = ',')]
    pub preferred: Option<Vec<String>>,

    /// Interface language code ("" follows the system locale)
    #[arg(long)]
    pub ui_language: Option<String>,
}

impl SetArgs {
    fn into_patch(self) -> ConfigPatch {
        ConfigPatch {
            api_key: self.api_key,
            target_language: self.target,
            preferred_languages: self
                .preferred
                .map(|codes| codes.into_iter().map(|c| c.trim().to_string()).filter(|c| !c.is_empty()).collect()),
            ui_language: self.ui_language,
        }
    }
}

pub fn handle_config(args: ConfigArgs, ctx: &mut Context) -> Result<()> {
    match args.action {
        ConfigAction::Show => show(ctx),
        ConfigAction::Set(set_args) => set(set_args, ctx),
        ConfigAction::Clear => clear(ctx),
    }
}

fn show(ctx: &mut Context) -> Result<()> {
    let config = ctx.store()?.get()?;
    Logger::info(tf!(ctx.localizer, "cli.config.path", path = ctx.config_path().display()));

    for (label, value) in describe(&config, &mut ctx.localizer, &ctx.reported_locale) {
        println!("  {}: {}", label.bold(), value);
    }
    Ok(())
}

/// Localized (label, value) rows for `config`
fn describe(config: &Config, l: &mut Localizer, reported_locale: &str) -> Vec<(String, String)> {
    let api_key = if config.api_key.is_empty() {
        t!(l, "settings.notSet")
    } else {
        mask_api_key(&config.api_key)
    };

    let target = language_name(l, &config.target_language, true);

    let preferred = if config.preferred_languages.is_empty() {
        t!(l, "settings.preferredLanguages.all")
    } else {
        config
            .preferred_languages
            .iter()
            .map(|code| language_name(l, code, false))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let ui_language = match &config.ui_language {
        Some(code) => code.clone(),
        None => {
            let detected = detect(reported_locale, None);
            tf!(l, "settings.uiLanguage.auto", locale = detected)
        }
    };

    vec![
        (t!(l, "settings.apiKey.label"), api_key),
        (t!(l, "settings.targetLanguage.label"), target),
        (t!(l, "settings.preferredLanguages.label"), preferred),
        (t!(l, "settings.uiLanguage.label"), ui_language),
    ]
}

/// Keep the "AIza" prefix and the last four characters
fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}

fn set(args: SetArgs, ctx: &mut Context) -> Result<()> {
    let patch = args.into_patch();
    if patch.is_empty() {
        Logger::warn(t!(ctx.localizer, "cli.config.nothingToSave"));
        return Ok(());
    }

    if let Some(message) = validate_patch(&patch, &mut ctx.localizer) {
        anyhow::bail!(message);
    }

    let store = ctx.store()?;
    match store.set(&patch) {
        Ok(change) => {
            // the interface follows a changed language right away, unless -l pinned it
            if let (Some(ui_language), None) = (&change.ui_language, &ctx.runtime.ui_language) {
                ctx.localizer
                    .apply_ui_language(ui_language.as_deref(), &ctx.reported_locale);
            }
            Logger::success(t!(ctx.localizer, "settings.saveSuccess"));
            Ok(())
        }
        Err(e) => {
            Logger::error(t!(ctx.localizer, "settings.saveError"));
            Err(e)
        }
    }
}

fn clear(ctx: &mut Context) -> Result<()> {
    match ctx.store() {
        Ok(store) => {
            store.clear()?;
        }
        // unreadable file: remove it so the next run starts from defaults
        Err(_) if ctx.config_path().exists() => std::fs::remove_file(ctx.config_path())?,
        Err(_) => {}
    }
    Logger::success(t!(ctx.localizer, "cli.config.cleared"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("AIza0123456789abcd"), "AIza**********abcd");
        assert_eq!(mask_api_key("short"), "*****");
    }

    #[test]
    fn test_describe_defaults() {
        let mut l = Localizer::builtin(LocaleCode::En);
        let rows = describe(&Config::default(), &mut l, "ja-JP");
        assert_eq!(
            rows,
            vec![
                ("Gemini API Key".to_string(), "Not set".to_string()),
                (
                    "Current Target Language".to_string(),
                    "Traditional Chinese(繁體中文)".to_string()
                ),
                ("Preferred Languages".to_string(), "All languages".to_string()),
                ("Interface Language".to_string(), "Follow system (ja)".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_args_into_patch() {
        let args = SetArgs {
            api_key: None,
            target: Some("ja".to_string()),
            preferred: Some(vec!["ja".to_string(), " ko ".to_string(), String::new()]),
            ui_language: None,
        };
        let patch = args.into_patch();
        assert_eq!(patch.target_language.as_deref(), Some("ja"));
        assert_eq!(patch.preferred_languages, Some(vec!["ja".to_string(), "ko".to_string()]));
    }
}
