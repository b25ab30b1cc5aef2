// ============================================================================
// Konnyaku - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 全局参数与运行时覆盖
//   - ✅ 命令共享上下文 (本地化器、设置)
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

pub mod config;
pub mod languages;
pub mod locale;
pub mod serve;
pub mod translate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::i18n::{environment_locale, LocaleCode, Localizer};
use crate::models::config::{Config, ConfigDefaults, ConfigStore, RuntimeArgs};
use crate::tf;
use crate::utils::logger::{configure_colors, init_tracing};
use config::{handle_config, ConfigArgs};
use languages::{handle_languages, LanguagesArgs};
use locale::{handle_locale, LocaleArgs};
use serve::{handle_serve, ServeArgs};
use translate::{handle_translate, TranslateArgs};

/// Konnyaku - select-and-translate helper backed by Gemini
#[derive(Debug, Parser)]
#[command(name = "konnyaku")]
#[command(about = "Translate text with the Gemini API, with a localized interface")]
#[command(version = env!("KONNYAKU_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (en, zh-TW, zh-CN, ja, ko); overrides the saved one
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key; overrides the saved key (GEMINI_API_KEY only fills in when none is saved)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate text into the target language
    Translate(TranslateArgs),
    /// Show or change saved settings
    Config(ConfigArgs),
    /// List translation target languages
    Languages(LanguagesArgs),
    /// Inspect interface language detection and lookups
    Locale(LocaleArgs),
    /// Answer JSON requests on stdin, one per line
    Serve(ServeArgs),
}

/// State shared by every command
pub struct Context {
    pub localizer: Localizer,
    pub runtime: RuntimeArgs,
    /// Environment locale the interface language was detected from
    pub reported_locale: String,
    pub verbose: bool,
    config_path: PathBuf,
    store: Option<Arc<ConfigStore>>,
    load_error: Option<String>,
}

impl Context {
    /// Open the settings and resolve the interface language.
    ///
    /// An unreadable settings file does not prevent startup; commands that need
    /// the settings report it through [`Context::store`].
    pub fn open(config_path: PathBuf, runtime: RuntimeArgs, verbose: bool) -> Self {
        let reported_locale = environment_locale();

        let (store, load_error) = match ConfigStore::open(&config_path) {
            Ok(store) => (Some(Arc::new(store)), None),
            Err(e) => (None, Some(format!("{:#}", e))),
        };

        let persisted = match (&runtime.ui_language, &store, &load_error) {
            (Some(code), _, _) => Ok(Some(code.clone())),
            (None, Some(store), _) => store.ui_language(),
            (None, None, Some(error)) => Err(anyhow::anyhow!("{}", error)),
            (None, None, None) => Ok(None),
        };
        let localizer = Localizer::bootstrap(persisted, &reported_locale);

        Self {
            localizer,
            runtime,
            reported_locale,
            verbose,
            config_path,
            store,
            load_error,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The settings store, or a localized error if it could not be loaded
    pub fn store(&mut self) -> Result<Arc<ConfigStore>> {
        if let Some(store) = &self.store {
            return Ok(Arc::clone(store));
        }
        let error = self.load_error.clone().unwrap_or_default();
        Err(anyhow::anyhow!(tf!(self.localizer, "cli.config.loadFailed", error = error)))
    }

    /// Saved settings with command line overrides applied
    pub fn effective_config(&mut self) -> Result<Config> {
        let runtime = self.runtime.clone();
        Ok(self.store()?.get()?.merge_runtime_args(&runtime))
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    configure_colors(cli.no_color);
    init_tracing(cli.verbose);

    let runtime = build_runtime_args(&cli)?;
    let config_path = cli.config.clone().unwrap_or_else(Config::default_config_path);
    let mut ctx = Context::open(config_path, runtime, cli.verbose);

    match cli.command {
        Commands::Translate(args) => handle_translate(args, &mut ctx).await,
        Commands::Config(args) => handle_config(args, &mut ctx),
        Commands::Languages(args) => handle_languages(args, &mut ctx),
        Commands::Locale(args) => handle_locale(args, &mut ctx),
        Commands::Serve(args) => handle_serve(args, &mut ctx).await,
    }
}

/// Build runtime args from CLI arguments and the environment
fn build_runtime_args(cli: &Cli) -> Result<RuntimeArgs> {
    let ui_language = match cli.language.as_deref() {
        Some(code) => Some(code.parse::<LocaleCode>()?.as_str().to_string()),
        None => None,
    };

    Ok(RuntimeArgs {
        api_key: cli.api_key.clone(),
        ui_language,
        ..Default::default()
    }
    .with_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18nError;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["konnyaku", "translate", "hello", "world", "-l", "ja", "--to", "ko"]).unwrap();
        assert_eq!(cli.language.as_deref(), Some("ja"));
        match cli.command {
            Commands::Translate(args) => {
                assert_eq!(args.text, vec!["hello", "world"]);
                assert_eq!(args.to.as_deref(), Some("ko"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_language_flag_is_rejected() {
        let cli = Cli::try_parse_from(["konnyaku", "-l", "fr", "languages"]).unwrap();
        let err = build_runtime_args(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<I18nError>(),
            Some(I18nError::UnsupportedLocale(code)) if code == "fr"
        ));
        assert_eq!(err.to_string(), "unsupported interface language: fr");

        let cli = Cli::try_parse_from(["konnyaku", "-l", "ja", "--api-key", "cli-key", "languages"]).unwrap();
        let runtime = build_runtime_args(&cli).unwrap();
        assert_eq!(runtime.ui_language.as_deref(), Some("ja"));
        assert_eq!(runtime.api_key.as_deref(), Some("cli-key"));
    }

    #[test]
    fn test_context_uses_language_override() {
        let dir = TempDir::new().unwrap();
        let runtime = RuntimeArgs {
            ui_language: Some("ko".to_string()),
            ..Default::default()
        };
        let ctx = Context::open(dir.path().join("konnyaku.toml"), runtime, false);
        assert_eq!(ctx.localizer.active_locale(), LocaleCode::Ko);
    }

    #[test]
    fn test_context_with_unreadable_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("konnyaku.toml");
        std::fs::write(&path, "targetLanguage = [").unwrap();
        let runtime = RuntimeArgs {
            ui_language: Some("en".to_string()),
            ..Default::default()
        };

        let mut ctx = Context::open(path, runtime, false);
        let err = ctx.store().unwrap_err().to_string();
        assert!(err.starts_with("Failed to load settings:"), "{}", err);
    }
}
