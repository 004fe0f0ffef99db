//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationFailed` | 422 Unprocessable Entity | 요청 본문 검증 실패 (모든 위반 필드 열거) |
//! | `MalformedJson` | 422 Unprocessable Entity | JSON 파싱 자체가 불가능한 본문 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 서버 오류 |
//!
//! 검증 실패는 클라이언트 귀책이므로 서버 장애로 로깅하지 않으며,
//! 요청이 저장소에 도달하기 전에 차단됩니다.

use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문 검증 실패 (422 Unprocessable Entity)
    ///
    /// 위반된 모든 필드와 사유가 `details` 맵으로 열거됩니다.
    #[error("Validation error: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    /// JSON 파싱 실패 (422 Unprocessable Entity)
    #[error("Malformed request body: {0}")]
    MalformedJson(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationFailed(_) | AppError::MalformedJson(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationFailed(errors) => json!({
                "error": "validation_error",
                "message": "입력 데이터가 유효하지 않습니다",
                "details": validation_details(errors),
            }),
            AppError::MalformedJson(message) => json!({
                "error": "malformed_body",
                "message": message,
            }),
            AppError::InternalError(message) => json!({
                "error": "internal_error",
                "message": message,
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// [`ValidationErrors`]를 필드별 메시지 목록으로 변환합니다
///
/// ```json
/// {
///   "email": ["유효한 이메일 주소를 입력해주세요"],
///   "password": ["비밀번호는 필수 입력 항목입니다"]
/// }
/// ```
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages: Vec<serde_json::Value> = field_errors
                .iter()
                .map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    serde_json::Value::String(message)
                })
                .collect();

            (field.to_string(), serde_json::Value::Array(messages))
        })
        .collect();

    serde_json::Value::Object(details)
}
