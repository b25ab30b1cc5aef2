// ============================================================================
// Konnyaku - 简体中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 简体中文翻译字符串
// 边界:
//   - ✅ 简体中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

use super::tree::LocaleNode::{self, Branch, Leaf};

/// 简体中文翻译表
pub static TRANSLATIONS: LocaleNode = Branch(&[
    (
        "settings",
        Branch(&[
            ("title", Leaf("Konnyaku 设置")),
            (
                "apiKey",
                Branch(&[
                    ("label", Leaf("Gemini API 密钥")),
                    ("placeholder", Leaf("输入您的 Gemini API 密钥")),
                    ("help", Leaf("从这里获取您的 API 密钥")),
                    ("helpLink", Leaf("Google AI Studio")),
                    ("invalidFormat", Leaf("这看起来不像 Gemini API 密钥（应为 \"AIza\" 开头加上 35 个字符）")),
                ]),
            ),
            (
                "targetLanguage",
                Branch(&[
                    ("label", Leaf("当前目标语言")),
                    ("help", Leaf("在翻译文本时，可在翻译弹出窗口中更改目标语言")),
                ]),
            ),
            (
                "preferredLanguages",
                Branch(&[
                    ("label", Leaf("首选语言")),
                    ("help", Leaf("选择您想在翻译弹出窗口下拉菜单中看到的语言")),
                    ("all", Leaf("所有语言")),
                ]),
            ),
            (
                "uiLanguage",
                Branch(&[
                    ("label", Leaf("界面语言")),
                    ("auto", Leaf("跟随系统（{locale}）")),
                ]),
            ),
            ("saveButton", Leaf("保存设置")),
            ("saveSuccess", Leaf("设置已成功保存！")),
            ("saveError", Leaf("保存设置失败")),
            ("notSet", Leaf("未设置")),
        ]),
    ),
    (
        "languages",
        Branch(&[
            ("zh-TW", Leaf("繁体中文")),
            ("zh-CN", Leaf("简体中文")),
            ("ja", Leaf("日文")),
            ("ko", Leaf("韩文")),
            ("en", Leaf("英文")),
            ("es", Leaf("西班牙文")),
            ("fr", Leaf("法文")),
            ("de", Leaf("德文")),
            ("it", Leaf("意大利文")),
            ("pt", Leaf("葡萄牙文")),
            ("ru", Leaf("俄文")),
            ("ar", Leaf("阿拉伯文")),
            ("hi", Leaf("印地文")),
            ("th", Leaf("泰文")),
            ("vi", Leaf("越南文")),
        ]),
    ),
    ("translating", Leaf("翻译中...")),
    ("error", Leaf("错误：")),
    ("failedToTranslate", Leaf("翻译失败")),
    ("playAudio", Leaf("播放音频")),
    ("audioGenerationFailed", Leaf("音频生成失败")),
    ("audioPlaybackFailed", Leaf("音频播放失败")),
    (
        "errors",
        Branch(&[
            ("emptyText", Leaf("请提供有效的文本")),
            ("textTooLong", Leaf("文本过长（{length} 个字符，上限 {max}），请选择较短的内容")),
            ("missingApiKey", Leaf("请先在设置中配置 API 密钥")),
            ("invalidApiKey", Leaf("API 密钥无效或已过期")),
            ("forbidden", Leaf("API 密钥没有权限访问此服务")),
            ("rateLimited", Leaf("请求过于频繁，请稍后再试")),
            ("serviceUnavailable", Leaf("翻译服务暂时无法使用，请稍后再试")),
            ("unknown", Leaf("发生未知错误")),
            ("network", Leaf("无法连接到翻译服务，请检查网络连接")),
            ("invalidResponse", Leaf("翻译服务响应格式错误")),
            ("unknownAction", Leaf("未知的操作")),
            ("apiError", Leaf("API 错误（{status}）：{message}")),
        ]),
    ),
    (
        "cli",
        Branch(&[
            (
                "config",
                Branch(&[
                    ("path", Leaf("设置文件：{path}")),
                    ("cleared", Leaf("已清除所有设置")),
                    ("nothingToSave", Leaf("未提供任何设置，无需保存")),
                    ("unsupportedTarget", Leaf("不支持的目标语言：{code}")),
                    ("unsupportedUiLanguage", Leaf("不支持的界面语言：{code}（支持：{supported}）")),
                    ("loadFailed", Leaf("加载设置失败：{error}")),
                ]),
            ),
            (
                "languages",
                Branch(&[
                    ("header", Leaf("翻译语言")),
                    ("current", Leaf("当前目标语言")),
                ]),
            ),
            (
                "locale",
                Branch(&[
                    ("reported", Leaf("系统语言环境：{locale}")),
                    ("persisted", Leaf("已保存的界面语言：{locale}")),
                    ("detected", Leaf("界面语言：{locale}")),
                    ("missing", Leaf("找不到“{key}”的翻译")),
                    ("stats", Leaf("路径缓存：{paths}，翻译缓存：{entries}/{max}，命中：{hits}，未命中：{misses}")),
                ]),
            ),
            ("translate", Branch(&[("target", Leaf("目标语言：{language}"))])),
            (
                "serve",
                Branch(&[
                    ("ready", Leaf("正在等待标准输入的请求")),
                    ("stopped", Leaf("输入已关闭，共处理 {count} 个请求")),
                ]),
            ),
        ]),
    ),
]);
