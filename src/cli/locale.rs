// ============================================================================
// Konnyaku - 界面语言诊断命令
// ============================================================================
//
// 文件: src/cli/locale.rs
// 职责: 界面语言检测与翻译键诊断
// 边界:
//   - ✅ 检测过程展示 (环境、已保存、最终结果)
//   - ✅ 带参数的单键查询
//   - ✅ 缓存统计
//   - ❌ 不应修改设置
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;
use crate::i18n::{detect, en, BatchItem, I18nError, Params};
use crate::utils::logger::Logger;
use crate::{t, tf};

#[derive(Debug, Args)]
pub struct LocaleArgs {
    #[command(subcommand)]
    pub action: LocaleAction,
}

#[derive(Debug, Subcommand)]
pub enum LocaleAction {
    /// Show how the interface language is chosen
    Detect {
        /// Pretend the environment reports this locale
        #[arg(long)]
        reported: Option<String>,
    },
    /// Look up one translation key
    Lookup {
        /// Dotted key, e.g. settings.apiKey.label
        key: String,

        /// Placeholder values as name=value
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Look the key up in another interface language
        #[arg(long)]
        locale: Option<String>,
    },
    /// Translate keys and report cache usage
    Stats {
        /// Keys to translate first (default: every key)
        keys: Vec<String>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

pub fn handle_locale(args: LocaleArgs, ctx: &mut Context) -> Result<()> {
    match args.action {
        LocaleAction::Detect { reported } => detect_locale(reported, ctx),
        LocaleAction::Lookup { key, params, locale } => lookup(&key, params, locale, ctx),
        LocaleAction::Stats { keys } => stats(keys, ctx),
    }
}

fn detect_locale(reported: Option<String>, ctx: &mut Context) -> Result<()> {
    let reported = reported.unwrap_or_else(|| ctx.reported_locale.clone());
    let persisted = match &ctx.runtime.ui_language {
        Some(code) => Some(code.clone()),
        None => ctx.store()?.ui_language()?,
    };
    let detected = detect(&reported, persisted.as_deref());

    Logger::info(tf!(ctx.localizer, "cli.locale.reported", locale = reported));
    let persisted = persisted.unwrap_or_else(|| t!(ctx.localizer, "settings.notSet"));
    Logger::info(tf!(ctx.localizer, "cli.locale.persisted", locale = persisted));
    Logger::success(tf!(ctx.localizer, "cli.locale.detected", locale = detected));
    Ok(())
}

fn lookup(key: &str, params: Vec<(String, String)>, locale: Option<String>, ctx: &mut Context) -> Result<()> {
    if let Some(code) = &locale {
        if !ctx.localizer.set_active_locale(code) {
            return Err(I18nError::UnsupportedLocale(code.clone()).into());
        }
    }

    let params: Params = params.into_iter().collect();
    match ctx.localizer.try_translate(key, &params) {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(I18nError::MissingKey { .. }) => {
            Logger::warn(tf!(ctx.localizer, "cli.locale.missing", key = key));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn stats(keys: Vec<String>, ctx: &mut Context) -> Result<()> {
    let keys = if keys.is_empty() {
        en::TRANSLATIONS.leaf_keys()
    } else {
        keys
    };

    let translated = ctx
        .localizer
        .batch_translate(keys.iter().map(|key| BatchItem::Key(key.as_str())));
    tracing::debug!(count = translated.len(), "keys translated");

    let stats = ctx.localizer.cache_stats();
    Logger::info(tf!(
        ctx.localizer,
        "cli.locale.stats",
        paths = stats.path_cache_size,
        entries = stats.translation_cache_size,
        max = stats.max_cache_size,
        hits = stats.hits,
        misses = stats.misses
    ));
    Ok(())
}
