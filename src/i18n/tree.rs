// ============================================================================
// Konnyaku - 语言树与路径解析
// ============================================================================
//
// 文件: src/i18n/tree.rs
// 职责: 类型化的嵌套字符串表及点分键解析
// 边界:
//   - ✅ 静态语言数据的叶子/分支树类型
//   - ✅ 将翻译键拆分为路径段
//   - ✅ 沿路径遍历语言树
//   - ❌ 不应包含缓存
//   - ❌ 不应包含回退策略
//   - ❌ 不应包含翻译内容
//
// ============================================================================

/// A node of a locale table: either a translated string or a nested table.
///
/// Tables are declared as `static` data and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleNode {
    Leaf(&'static str),
    Branch(&'static [(&'static str, LocaleNode)]),
}

impl LocaleNode {
    /// Child node under `segment`; `None` for leaves or absent segments.
    pub fn get(&self, segment: &str) -> Option<&LocaleNode> {
        match *self {
            LocaleNode::Leaf(_) => None,
            LocaleNode::Branch(children) => children
                .iter()
                .find(|(name, _)| *name == segment)
                .map(|(_, node)| node),
        }
    }

    pub fn as_leaf(&self) -> Option<&'static str> {
        match *self {
            LocaleNode::Leaf(text) => Some(text),
            LocaleNode::Branch(_) => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, LocaleNode::Branch(_))
    }

    /// Every dotted key that addresses a leaf below this node, in declaration order.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(self, &mut String::new(), &mut keys);
        keys
    }
}

fn collect_leaf_keys(node: &LocaleNode, prefix: &mut String, keys: &mut Vec<String>) {
    match *node {
        LocaleNode::Leaf(_) => keys.push(prefix.clone()),
        LocaleNode::Branch(children) => {
            for (name, child) in children {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(name);
                collect_leaf_keys(child, prefix, keys);
                prefix.truncate(len);
            }
        }
    }
}

/// Split a dotted translation key into its path segments.
pub fn parse_path(key: &str) -> Vec<String> {
    key.split('.').map(str::to_string).collect()
}

/// Walk `tree` one segment at a time.
///
/// Returns `None` as soon as a segment is missing or a leaf is reached before the
/// path ends. Never fails: absence is an ordinary outcome.
pub fn resolve<'a, S: AsRef<str>>(tree: &'a LocaleNode, path: &[S]) -> Option<&'a LocaleNode> {
    path.iter()
        .try_fold(tree, |node, segment| node.get(segment.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::LocaleNode::{Branch, Leaf};
    use super::*;

    static TREE: LocaleNode = Branch(&[
        ("greeting", Leaf("Hello")),
        (
            "settings",
            Branch(&[
                ("title", Leaf("Settings")),
                ("apiKey", Branch(&[("label", Leaf("API Key"))])),
            ]),
        ),
        ("languages", Branch(&[("zh-TW", Leaf("Traditional Chinese"))])),
    ]);

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("settings.apiKey.label"), vec!["settings", "apiKey", "label"]);
        assert_eq!(parse_path("greeting"), vec!["greeting"]);
        assert_eq!(parse_path(""), vec![""]);
    }

    #[test]
    fn test_resolve_leaf() {
        let path = parse_path("settings.apiKey.label");
        assert_eq!(resolve(&TREE, &path), Some(&Leaf("API Key")));

        let path = parse_path("languages.zh-TW");
        assert_eq!(resolve(&TREE, &path).and_then(LocaleNode::as_leaf), Some("Traditional Chinese"));
    }

    #[test]
    fn test_resolve_missing_segment() {
        assert_eq!(resolve(&TREE, &parse_path("settings.missing")), None);
        assert_eq!(resolve(&TREE, &parse_path("nope")), None);
    }

    #[test]
    fn test_resolve_through_leaf_is_missing() {
        // "greeting" is a leaf, so nothing lives below it
        assert_eq!(resolve(&TREE, &parse_path("greeting.extra")), None);
    }

    #[test]
    fn test_resolve_branch() {
        let node = resolve(&TREE, &parse_path("settings.apiKey")).unwrap();
        assert!(node.is_branch());
        assert_eq!(node.as_leaf(), None);
    }

    #[test]
    fn test_resolve_empty_path_returns_root() {
        let path: Vec<String> = Vec::new();
        assert_eq!(resolve(&TREE, &path), Some(&TREE));
    }

    #[test]
    fn test_leaf_keys() {
        assert_eq!(
            TREE.leaf_keys(),
            vec!["greeting", "settings.title", "settings.apiKey.label", "languages.zh-TW"]
        );
    }
}
