// ============================================================================
// Konnyaku - 占位符插值
// ============================================================================
//
// 文件: src/i18n/interpolate.rs
// 职责: 翻译字符串中的 `{name}` 占位符替换
// 边界:
//   - ✅ 参数映射类型
//   - ✅ 单次遍历的占位符替换
//   - ❌ 不应包含查找逻辑
//   - ❌ 不应包含复数或数字格式化
//
// ============================================================================

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"))
}

/// Named values substituted into `{name}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Replace every `{name}` whose name is in `params`.
///
/// Unknown placeholders stay verbatim and substituted values are not rescanned.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    placeholder()
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
