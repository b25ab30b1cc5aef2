// ============================================================================
// Konnyaku - 日文翻译表
// ============================================================================
//
// 文件: src/i18n/ja.rs
// 职责: 日文翻译字符串
// 边界:
//   - ✅ 日文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

use super::tree::LocaleNode::{self, Branch, Leaf};

/// 日本語翻訳テーブル
pub static TRANSLATIONS: LocaleNode = Branch(&[
    (
        "settings",
        Branch(&[
            ("title", Leaf("Konnyaku 設定")),
            (
                "apiKey",
                Branch(&[
                    ("label", Leaf("Gemini API キー")),
                    ("placeholder", Leaf("Gemini API キーを入力してください")),
                    ("help", Leaf("API キーはこちらから取得できます")),
                    ("helpLink", Leaf("Google AI Studio")),
                    ("invalidFormat", Leaf("Gemini API キーの形式ではないようです（\"AIza\" に続く 35 文字が必要です）")),
                ]),
            ),
            (
                "targetLanguage",
                Branch(&[
                    ("label", Leaf("現在の翻訳先言語")),
                    ("help", Leaf("テキストを翻訳する際、翻訳ポップアップで翻訳先言語を変更できます")),
                ]),
            ),
            (
                "preferredLanguages",
                Branch(&[
                    ("label", Leaf("優先言語")),
                    ("help", Leaf("翻訳ポップアップのドロップダウンに表示する言語を選択してください")),
                    ("all", Leaf("すべての言語")),
                ]),
            ),
            (
                "uiLanguage",
                Branch(&[
                    ("label", Leaf("インターフェース言語")),
                    ("auto", Leaf("システムに従う（{locale}）")),
                ]),
            ),
            ("saveButton", Leaf("設定を保存")),
            ("saveSuccess", Leaf("設定が正常に保存されました！")),
            ("saveError", Leaf("設定の保存に失敗しました")),
            ("notSet", Leaf("未設定")),
        ]),
    ),
    (
        "languages",
        Branch(&[
            ("zh-TW", Leaf("繁体字中国語")),
            ("zh-CN", Leaf("簡体字中国語")),
            ("ja", Leaf("日本語")),
            ("ko", Leaf("韓国語")),
            ("en", Leaf("英語")),
            ("es", Leaf("スペイン語")),
            ("fr", Leaf("フランス語")),
            ("de", Leaf("ドイツ語")),
            ("it", Leaf("イタリア語")),
            ("pt", Leaf("ポルトガル語")),
            ("ru", Leaf("ロシア語")),
            ("ar", Leaf("アラビア語")),
            ("hi", Leaf("ヒンディー語")),
            ("th", Leaf("タイ語")),
            ("vi", Leaf("ベトナム語")),
        ]),
    ),
    ("translating", Leaf("翻訳中...")),
    ("error", Leaf("エラー：")),
    ("failedToTranslate", Leaf("翻訳に失敗しました")),
    ("playAudio", Leaf("音声を再生")),
    ("audioGenerationFailed", Leaf("音声生成に失敗しました")),
    ("audioPlaybackFailed", Leaf("音声再生に失敗しました")),
    (
        "errors",
        Branch(&[
            ("emptyText", Leaf("翻訳するテキストを指定してください")),
            ("textTooLong", Leaf("テキストが長すぎます（{length} 文字、上限 {max}）。短い範囲を選択してください")),
            ("missingApiKey", Leaf("先に設定で API キーを設定してください")),
            ("invalidApiKey", Leaf("API キーが無効か期限切れです")),
            ("forbidden", Leaf("この API キーにはサービスへのアクセス権がありません")),
            ("rateLimited", Leaf("リクエストが多すぎます。しばらくしてから再試行してください")),
            ("serviceUnavailable", Leaf("翻訳サービスは一時的に利用できません。しばらくしてから再試行してください")),
            ("unknown", Leaf("不明なエラーが発生しました")),
            ("network", Leaf("翻訳サービスに接続できません。ネットワーク接続を確認してください")),
            ("invalidResponse", Leaf("翻訳サービスの応答形式が正しくありません")),
            ("unknownAction", Leaf("不明なアクションです")),
            ("apiError", Leaf("API エラー（{status}）：{message}")),
        ]),
    ),
    (
        "cli",
        Branch(&[
            (
                "config",
                Branch(&[
                    ("path", Leaf("設定ファイル：{path}")),
                    ("cleared", Leaf("すべての設定を消去しました")),
                    ("nothingToSave", Leaf("設定が指定されていないため、保存するものはありません")),
                    ("unsupportedTarget", Leaf("サポートされていない翻訳先言語です：{code}")),
                    ("unsupportedUiLanguage", Leaf("サポートされていないインターフェース言語です：{code}（対応：{supported}）")),
                    ("loadFailed", Leaf("設定の読み込みに失敗しました：{error}")),
                ]),
            ),
            (
                "languages",
                Branch(&[
                    ("header", Leaf("翻訳言語")),
                    ("current", Leaf("現在の翻訳先")),
                ]),
            ),
            (
                "locale",
                Branch(&[
                    ("reported", Leaf("環境のロケール：{locale}")),
                    ("persisted", Leaf("保存されたインターフェース言語：{locale}")),
                    ("detected", Leaf("インターフェース言語：{locale}")),
                    ("missing", Leaf("「{key}」の翻訳が見つかりません")),
                    ("stats", Leaf("パスキャッシュ：{paths}、翻訳キャッシュ：{entries}/{max}、ヒット：{hits}、ミス：{misses}")),
                ]),
            ),
            ("translate", Branch(&[("target", Leaf("翻訳先言語：{language}"))])),
            (
                "serve",
                Branch(&[
                    ("ready", Leaf("標準入力からのリクエストを待機しています")),
                    ("stopped", Leaf("入力が閉じられました（{count} 件のリクエストを処理）")),
                ]),
            ),
        ]),
    ),
]);
