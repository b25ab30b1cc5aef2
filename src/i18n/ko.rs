// ============================================================================
// Konnyaku - 韩文翻译表
// ============================================================================
//
// 文件: src/i18n/ko.rs
// 职责: 韩文翻译字符串
// 边界:
//   - ✅ 韩文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

use super::tree::LocaleNode::{self, Branch, Leaf};

/// 한국어 번역 테이블
pub static TRANSLATIONS: LocaleNode = Branch(&[
    (
        "settings",
        Branch(&[
            ("title", Leaf("Konnyaku 설정")),
            (
                "apiKey",
                Branch(&[
                    ("label", Leaf("Gemini API 키")),
                    ("placeholder", Leaf("Gemini API 키를 입력하세요")),
                    ("help", Leaf("여기에서 API 키를 받으세요")),
                    ("helpLink", Leaf("Google AI Studio")),
                    ("invalidFormat", Leaf("Gemini API 키 형식이 아닌 것 같습니다 (\"AIza\"로 시작하는 39자여야 합니다)")),
                ]),
            ),
            (
                "targetLanguage",
                Branch(&[
                    ("label", Leaf("현재 대상 언어")),
                    ("help", Leaf("텍스트를 번역할 때 번역 팝업에서 대상 언어를 변경할 수 있습니다")),
                ]),
            ),
            (
                "preferredLanguages",
                Branch(&[
                    ("label", Leaf("선호 언어")),
                    ("help", Leaf("번역 팝업 드롭다운에 표시할 언어를 선택하세요")),
                    ("all", Leaf("모든 언어")),
                ]),
            ),
            (
                "uiLanguage",
                Branch(&[
                    ("label", Leaf("인터페이스 언어")),
                    ("auto", Leaf("시스템 설정 따르기 ({locale})")),
                ]),
            ),
            ("saveButton", Leaf("설정 저장")),
            ("saveSuccess", Leaf("설정이 성공적으로 저장되었습니다!")),
            ("saveError", Leaf("설정 저장 실패")),
            ("notSet", Leaf("설정되지 않음")),
        ]),
    ),
    (
        "languages",
        Branch(&[
            ("zh-TW", Leaf("번체 중국어")),
            ("zh-CN", Leaf("간체 중국어")),
            ("ja", Leaf("일본어")),
            ("ko", Leaf("한국어")),
            ("en", Leaf("영어")),
            ("es", Leaf("스페인어")),
            ("fr", Leaf("프랑스어")),
            ("de", Leaf("독일어")),
            ("it", Leaf("이탈리아어")),
            ("pt", Leaf("포르투갈어")),
            ("ru", Leaf("러시아어")),
            ("ar", Leaf("아랍어")),
            ("hi", Leaf("힌디어")),
            ("th", Leaf("태국어")),
            ("vi", Leaf("베트남어")),
        ]),
    ),
    ("translating", Leaf("번역 중...")),
    ("error", Leaf("오류:")),
    ("failedToTranslate", Leaf("번역 실패")),
    ("playAudio", Leaf("오디오 재생")),
    ("audioGenerationFailed", Leaf("오디오 생성 실패")),
    ("audioPlaybackFailed", Leaf("오디오 재생 실패")),
    (
        "errors",
        Branch(&[
            ("emptyText", Leaf("번역할 텍스트를 입력하세요")),
            ("textTooLong", Leaf("텍스트가 너무 깁니다 ({length}자, 최대 {max}자). 더 짧은 부분을 선택하세요")),
            ("missingApiKey", Leaf("먼저 설정에서 API 키를 구성하세요")),
            ("invalidApiKey", Leaf("API 키가 유효하지 않거나 만료되었습니다")),
            ("forbidden", Leaf("이 API 키로는 서비스에 접근할 수 없습니다")),
            ("rateLimited", Leaf("요청이 너무 많습니다. 잠시 후 다시 시도하세요")),
            ("serviceUnavailable", Leaf("번역 서비스를 일시적으로 사용할 수 없습니다. 잠시 후 다시 시도하세요")),
            ("unknown", Leaf("알 수 없는 오류가 발생했습니다")),
            ("network", Leaf("번역 서비스에 연결할 수 없습니다. 네트워크 연결을 확인하세요")),
            ("invalidResponse", Leaf("번역 서비스 응답 형식이 올바르지 않습니다")),
            ("unknownAction", Leaf("알 수 없는 작업입니다")),
            ("apiError", Leaf("API 오류 ({status}): {message}")),
        ]),
    ),
    (
        "cli",
        Branch(&[
            (
                "config",
                Branch(&[
                    ("path", Leaf("설정 파일: {path}")),
                    ("cleared", Leaf("모든 설정을 지웠습니다")),
                    ("nothingToSave", Leaf("지정된 설정이 없어 저장할 내용이 없습니다")),
                    ("unsupportedTarget", Leaf("지원하지 않는 대상 언어: {code}")),
                    ("unsupportedUiLanguage", Leaf("지원하지 않는 인터페이스 언어: {code} (지원: {supported})")),
                    ("loadFailed", Leaf("설정을 불러오지 못했습니다: {error}")),
                ]),
            ),
            (
                "languages",
                Branch(&[
                    ("header", Leaf("번역 언어")),
                    ("current", Leaf("현재 대상")),
                ]),
            ),
            (
                "locale",
                Branch(&[
                    ("reported", Leaf("환경 로케일: {locale}")),
                    ("persisted", Leaf("저장된 인터페이스 언어: {locale}")),
                    ("detected", Leaf("인터페이스 언어: {locale}")),
                    ("missing", Leaf("'{key}'에 대한 번역이 없습니다")),
                    ("stats", Leaf("경로 캐시: {paths}, 번역 캐시: {entries}/{max}, 적중: {hits}, 실패: {misses}")),
                ]),
            ),
            ("translate", Branch(&[("target", Leaf("대상 언어: {language}"))])),
            (
                "serve",
                Branch(&[
                    ("ready", Leaf("표준 입력에서 요청을 기다리는 중")),
                    ("stopped", Leaf("입력이 닫혔습니다 (요청 {count}건 처리)")),
                ]),
            ),
        ]),
    ),
]);
