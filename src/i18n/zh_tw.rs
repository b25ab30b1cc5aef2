// ============================================================================
// Konnyaku - 繁体中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_tw.rs
// 职责: 繁体中文翻译字符串
// 边界:
//   - ✅ 繁体中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

use super::tree::LocaleNode::{self, Branch, Leaf};

/// 繁體中文翻譯表
pub static TRANSLATIONS: LocaleNode = Branch(&[
    (
        "settings",
        Branch(&[
            ("title", Leaf("Konnyaku 設定")),
            (
                "apiKey",
                Branch(&[
                    ("label", Leaf("Gemini API 金鑰")),
                    ("placeholder", Leaf("輸入您的 Gemini API 金鑰")),
                    ("help", Leaf("從這裡取得您的 API 金鑰")),
                    ("helpLink", Leaf("Google AI Studio")),
                    ("invalidFormat", Leaf("這看起來不像 Gemini API 金鑰（應為 \"AIza\" 開頭加上 35 個字元）")),
                ]),
            ),
            (
                "targetLanguage",
                Branch(&[
                    ("label", Leaf("目前的目標語言")),
                    ("help", Leaf("在翻譯文字時，可在翻譯彈出視窗中更改目標語言")),
                ]),
            ),
            (
                "preferredLanguages",
                Branch(&[
                    ("label", Leaf("偏好語言")),
                    ("help", Leaf("選擇您想在翻譯彈出視窗下拉選單中看到的語言")),
                    ("all", Leaf("所有語言")),
                ]),
            ),
            (
                "uiLanguage",
                Branch(&[
                    ("label", Leaf("介面語言")),
                    ("auto", Leaf("跟隨系統（{locale}）")),
                ]),
            ),
            ("saveButton", Leaf("儲存設定")),
            ("saveSuccess", Leaf("設定已成功儲存！")),
            ("saveError", Leaf("儲存設定失敗")),
            ("notSet", Leaf("未設定")),
        ]),
    ),
    (
        "languages",
        Branch(&[
            ("zh-TW", Leaf("繁體中文")),
            ("zh-CN", Leaf("簡體中文")),
            ("ja", Leaf("日文")),
            ("ko", Leaf("韓文")),
            ("en", Leaf("英文")),
            ("es", Leaf("西班牙文")),
            ("fr", Leaf("法文")),
            ("de", Leaf("德文")),
            ("it", Leaf("義大利文")),
            ("pt", Leaf("葡萄牙文")),
            ("ru", Leaf("俄文")),
            ("ar", Leaf("阿拉伯文")),
            ("hi", Leaf("印地文")),
            ("th", Leaf("泰文")),
            ("vi", Leaf("越南文")),
        ]),
    ),
    ("translating", Leaf("翻譯中...")),
    ("error", Leaf("錯誤：")),
    ("failedToTranslate", Leaf("翻譯失敗")),
    ("playAudio", Leaf("播放音訊")),
    ("audioGenerationFailed", Leaf("音訊生成失敗")),
    ("audioPlaybackFailed", Leaf("音訊播放失敗")),
    (
        "errors",
        Branch(&[
            ("emptyText", Leaf("請提供有效的文字")),
            ("textTooLong", Leaf("文字過長（{length} 個字元，上限 {max}），請選擇較短的內容")),
            ("missingApiKey", Leaf("請先在設定中配置 API 金鑰")),
            ("invalidApiKey", Leaf("API 金鑰無效或已過期")),
            ("forbidden", Leaf("API 金鑰沒有權限存取此服務")),
            ("rateLimited", Leaf("請求過於頻繁，請稍後再試")),
            ("serviceUnavailable", Leaf("翻譯服務暫時無法使用，請稍後再試")),
            ("unknown", Leaf("發生未知錯誤")),
            ("network", Leaf("無法連接到翻譯服務，請檢查網路連線")),
            ("invalidResponse", Leaf("翻譯服務回應格式錯誤")),
            ("unknownAction", Leaf("未知的動作")),
            ("apiError", Leaf("API 錯誤（{status}）：{message}")),
        ]),
    ),
    (
        "cli",
        Branch(&[
            (
                "config",
                Branch(&[
                    ("path", Leaf("設定檔：{path}")),
                    ("cleared", Leaf("已清除所有設定")),
                    ("nothingToSave", Leaf("未提供任何設定，沒有需要儲存的內容")),
                    ("unsupportedTarget", Leaf("不支援的目標語言：{code}")),
                    ("unsupportedUiLanguage", Leaf("不支援的介面語言：{code}（支援：{supported}）")),
                    ("loadFailed", Leaf("載入設定失敗：{error}")),
                ]),
            ),
            (
                "languages",
                Branch(&[
                    ("header", Leaf("翻譯語言")),
                    ("current", Leaf("目前的目標語言")),
                ]),
            ),
            (
                "locale",
                Branch(&[
                    ("reported", Leaf("系統語系：{locale}")),
                    ("persisted", Leaf("已儲存的介面語言：{locale}")),
                    ("detected", Leaf("介面語言：{locale}")),
                    ("missing", Leaf("找不到「{key}」的翻譯")),
                    ("stats", Leaf("路徑快取：{paths}，翻譯快取：{entries}/{max}，命中：{hits}，未命中：{misses}")),
                ]),
            ),
            ("translate", Branch(&[("target", Leaf("目標語言：{language}"))])),
            (
                "serve",
                Branch(&[
                    ("ready", Leaf("正在等待標準輸入的請求")),
                    ("stopped", Leaf("輸入已關閉，共處理 {count} 個請求")),
                ]),
            ),
        ]),
    ),
]);
