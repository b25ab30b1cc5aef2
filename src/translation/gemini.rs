// ============================================================================
// Konnyaku - Gemini 翻译后端
// ============================================================================
//
// 文件: src/translation/gemini.rs
// 职责: 调用 Gemini generateContent API 完成翻译
// 边界:
//   - ✅ 提示词构建
//   - ✅ HTTP 请求/响应处理
//   - ✅ API 错误分类
//   - ✅ API 密钥格式检查
//   - ❌ 不应读取设置
//   - ❌ 不应生成面向用户的文本
//   - ❌ 不应包含重试或缓存
//
// ============================================================================

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use super::languages;
use crate::i18n::Localizer;
use crate::utils::constants::api;
use crate::{t, tf};

/// Why the API rejected a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Message reported by the API itself (or the raw response body)
    Message(String),
    InvalidApiKey,
    Forbidden,
    RateLimited,
    ServiceUnavailable,
    Unknown,
}

impl ApiErrorKind {
    /// Prefer the API's own message, otherwise classify by status
    fn from_response(status: StatusCode, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(message) = parsed.error.and_then(|e| e.message).filter(|m| !m.is_empty()) {
                return ApiErrorKind::Message(message);
            }
        }

        match status.as_u16() {
            401 => ApiErrorKind::InvalidApiKey,
            403 => ApiErrorKind::Forbidden,
            429 => ApiErrorKind::RateLimited,
            500 | 502 | 503 => ApiErrorKind::ServiceUnavailable,
            _ if !body.trim().is_empty() => ApiErrorKind::Message(body.trim().to_string()),
            _ => ApiErrorKind::Unknown,
        }
    }

    fn localize(&self, localizer: &mut Localizer) -> String {
        match self {
            ApiErrorKind::Message(message) => message.clone(),
            ApiErrorKind::InvalidApiKey => t!(localizer, "errors.invalidApiKey"),
            ApiErrorKind::Forbidden => t!(localizer, "errors.forbidden"),
            ApiErrorKind::RateLimited => t!(localizer, "errors.rateLimited"),
            ApiErrorKind::ServiceUnavailable => t!(localizer, "errors.serviceUnavailable"),
            ApiErrorKind::Unknown => t!(localizer, "errors.unknown"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("cannot reach the translation service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {kind:?}")]
    Api { status: u16, kind: ApiErrorKind },

    #[error("unexpected response from the translation service: {0}")]
    InvalidResponse(String),
}

impl TranslateError {
    /// Message shown to the user, in the interface language
    pub fn localize(&self, localizer: &mut Localizer) -> String {
        match self {
            TranslateError::Network(_) => t!(localizer, "errors.network"),
            TranslateError::Api { status, kind } => {
                let message = kind.localize(localizer);
                tf!(localizer, "errors.apiError", status = status, message = message)
            }
            TranslateError::InvalidResponse(_) => t!(localizer, "errors.invalidResponse"),
        }
    }
}

/// Something that can translate text
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str, api_key: &str) -> Result<String, TranslateError>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: api::BASE_URL.to_string(),
            model: api::MODEL_NAME.to_string(),
        }
    }

    /// Point at another endpoint (proxies, tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, TranslateError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, "sending translation request");
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %body, "translation request rejected");
            return Err(TranslateError::Api {
                status: status.as_u16(),
                kind: ApiErrorKind::from_response(status, &body),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| TranslateError::InvalidResponse(e.to_string()))?;
        parsed.into_text().ok_or_else(|| {
            tracing::warn!(body = %body, "response has no translated text");
            TranslateError::InvalidResponse("no candidate text".to_string())
        })
    }
}

#[async_trait]
impl TranslationBackend for GeminiClient {
    async fn translate(&self, text: &str, target_language: &str, api_key: &str) -> Result<String, TranslateError> {
        let prompt = build_prompt(text, target_language);
        self.generate(&prompt, api_key).await
    }
}

/// Prompt asking for a bare translation into `target_language`
pub fn build_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Please translate the following text to {}({}).\n\
         Auto-detect the source language.\n\
         Only provide the translation without any explanation or additional text.\n\
         \n\
         Text to translate: \"{}\"",
        languages::english_name(target_language),
        target_language,
        text
    )
}

static API_KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Google API keys are "AIza" followed by 35 URL-safe characters
pub fn validate_api_key(api_key: &str) -> bool {
    API_KEY_PATTERN
        .get_or_init(|| Regex::new(r"^AIza[A-Za-z0-9_-]{35}$").expect("api key pattern is valid"))
        .is_match(api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "test-model";

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new().with_base_url(server.uri()).with_model(MODEL)
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("hello", "ja");
        assert!(prompt.starts_with("Please translate the following text to Japanese(ja)."));
        assert!(prompt.ends_with("Text to translate: \"hello\""));
        assert!(build_prompt("x", "xx").contains("to xx(xx)"));
    }

    #[test]
    fn test_validate_api_key() {
        let valid = format!("AIza{}", "a".repeat(35));
        assert!(validate_api_key(&valid));
        assert!(validate_api_key(&format!("AIza{}", "-_9Z".repeat(8) + "abc")));
        assert!(!validate_api_key(&format!("AIza{}", "a".repeat(34))));
        assert!(!validate_api_key(&format!("AIzb{}", "a".repeat(35))));
        assert!(!validate_api_key(""));
    }

    #[test]
    fn test_error_classification() {
        let kind = ApiErrorKind::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"code":400,"message":"API key not valid."}}"#,
        );
        assert_eq!(kind, ApiErrorKind::Message("API key not valid.".to_string()));
        assert_eq!(ApiErrorKind::from_response(StatusCode::UNAUTHORIZED, ""), ApiErrorKind::InvalidApiKey);
        assert_eq!(ApiErrorKind::from_response(StatusCode::FORBIDDEN, "nope"), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_response(StatusCode::TOO_MANY_REQUESTS, ""), ApiErrorKind::RateLimited);
        assert_eq!(ApiErrorKind::from_response(StatusCode::BAD_GATEWAY, ""), ApiErrorKind::ServiceUnavailable);
        assert_eq!(
            ApiErrorKind::from_response(StatusCode::IM_A_TEAPOT, "short and stout"),
            ApiErrorKind::Message("short and stout".to_string())
        );
        assert_eq!(ApiErrorKind::from_response(StatusCode::IM_A_TEAPOT, ""), ApiErrorKind::Unknown);
    }

    #[test]
    fn test_localized_error_messages() {
        let mut l = Localizer::builtin(LocaleCode::ZhTw);
        let err = TranslateError::Api {
            status: 401,
            kind: ApiErrorKind::InvalidApiKey,
        };
        assert_eq!(err.localize(&mut l), "API 錯誤（401）：API 金鑰無效或已過期");

        let mut l = Localizer::builtin(LocaleCode::En);
        let err = TranslateError::InvalidResponse("empty".to_string());
        assert_eq!(err.localize(&mut l), "The translation service returned an unexpected response");
    }

    #[tokio::test]
    async fn test_translate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", MODEL)))
            .and(query_param("key", "secret"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{ "parts": [{ "text": build_prompt("Good morning", "ja") }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "  おはようございます\n" }], "role": "model" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let translation = client.translate("Good morning", "ja", "secret").await.unwrap();
        assert_eq!(translation, "おはようございます");
    }

    #[tokio::test]
    async fn test_translate_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string(""))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.translate("hi", "fr", "secret").await.unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Api {
                status: 429,
                kind: ApiErrorKind::RateLimited
            }
        ));
    }

    #[tokio::test]
    async fn test_translate_missing_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.translate("hi", "fr", "secret").await.unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_translate_network_error() {
        // nothing listens on port 9 of localhost
        let client = GeminiClient::new().with_base_url("http://127.0.0.1:9");
        let err = client.translate("hi", "fr", "secret").await.unwrap_err();
        assert!(matches!(err, TranslateError::Network(_)));
    }
}
