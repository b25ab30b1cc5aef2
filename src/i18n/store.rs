// ============================================================================
// Konnyaku - 语言表存储
// ============================================================================
//
// 文件: src/i18n/store.rs
// 职责: 界面语言到静态字符串表的映射
// 边界:
//   - ✅ 内置语言表注册
//   - ✅ 按语言代码查表
//   - ❌ 不应包含翻译内容
//   - ❌ 不应包含查找或回退逻辑
//
// ============================================================================

use std::collections::BTreeMap;

use super::locale::LocaleCode;
use super::tree::LocaleNode;
use super::{en, ja, ko, zh_cn, zh_tw};

/// Locale tables available to a [`Localizer`](super::Localizer).
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    tables: BTreeMap<LocaleCode, &'static LocaleNode>,
}

impl LocaleStore {
    /// Store without any tables; add them with [`LocaleStore::with_locale`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tables shipped with the application.
    pub fn builtin() -> Self {
        Self::empty()
            .with_locale(LocaleCode::En, &en::TRANSLATIONS)
            .with_locale(LocaleCode::ZhTw, &zh_tw::TRANSLATIONS)
            .with_locale(LocaleCode::ZhCn, &zh_cn::TRANSLATIONS)
            .with_locale(LocaleCode::Ja, &ja::TRANSLATIONS)
            .with_locale(LocaleCode::Ko, &ko::TRANSLATIONS)
    }

    pub fn with_locale(mut self, code: LocaleCode, table: &'static LocaleNode) -> Self {
        self.tables.insert(code, table);
        self
    }

    pub fn get(&self, code: LocaleCode) -> Option<&'static LocaleNode> {
        self.tables.get(&code).copied()
    }

    pub fn contains(&self, code: LocaleCode) -> bool {
        self.tables.contains_key(&code)
    }

    pub fn locales(&self) -> impl Iterator<Item = LocaleCode> + '_ {
        self.tables.keys().copied()
    }
}
