//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 레코드 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 필수, 빈 문자열 불허
//!
//! ### 이메일 (`email`)
//! - 필수, RFC 5322 표준 이메일 형식 준수
//!
//! ### 비밀번호 (`password`)
//! - 필수, 빈 문자열 불허
//! - 응답으로 절대 되돌려주지 않음
//!
//! ### 전체 이름 (`full_name`)
//! - 선택, 생략 시 부재로 처리
//!
//! ## 전수 검증
//!
//! 모든 필드를 `Option<String>`으로 역직렬화한 뒤 `#[validate(required)]`로
//! 필수 여부를 검사합니다. serde 단계에서 누락 필드로 즉시 실패하는 대신
//! 검증 단계에서 누락/형식 위반을 **한 번에 전부** 수집해
//! 하나의 [`ValidationErrors`]로 보고하기 위한 구조입니다.
//! 선언되지 않은 추가 필드는 거부하지 않고 무시합니다.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// 새로운 사용자 레코드 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 검증을 통과한 뒤에는 [`into_new_user`](Self::into_new_user)로
/// 필수 필드가 보장된 [`NewUser`] 값으로 변환해 사용합니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "johndoe",
///   "email": "john@example.com",
///   "password": "securepassword123",
///   "full_name": "John Doe"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// 사용자명 (필수, 비어 있을 수 없음)
    #[validate(required(message = "사용자명은 필수 입력 항목입니다"))]
    #[validate(length(min = 1, message = "사용자명은 비어 있을 수 없습니다"))]
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    /// 사용자 이메일 주소 (필수, RFC 5322 표준)
    #[validate(required(message = "이메일은 필수 입력 항목입니다"))]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    /// 계정 비밀번호 (필수, 응답에 포함되지 않음)
    #[validate(required(message = "비밀번호는 필수 입력 항목입니다"))]
    #[validate(length(min = 1, message = "비밀번호는 비어 있을 수 없습니다"))]
    #[schema(example = "securepassword123")]
    pub password: Option<String>,

    /// 전체 이름 (선택)
    #[schema(example = "John Doe")]
    pub full_name: Option<String>,
}

/// 검증을 통과한 사용자 생성 입력값
///
/// `CreateUserRequest`와 달리 필수 필드가 `Option`이 아닌 확정값으로 존재합니다.
/// 서비스 계층은 이 타입만 다루므로 미검증 입력이 파이프라인에 들어올 수 없습니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl CreateUserRequest {
    /// 전수 검증 후 [`NewUser`]로 변환합니다
    ///
    /// # Returns
    ///
    /// * `Ok(NewUser)` - 모든 검증 규칙을 통과한 경우
    /// * `Err(ValidationErrors)` - 위반된 모든 필드와 사유가 수집된 경우
    pub fn into_new_user(self) -> Result<NewUser, ValidationErrors> {
        self.validate()?;

        let Self {
            username,
            email,
            password,
            full_name,
        } = self;

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) => Ok(NewUser {
                username,
                email,
                password,
                full_name,
            }),
            // required 검증 통과 시 도달 불가
            _ => {
                let mut errors = ValidationErrors::new();
                errors.add("body", ValidationError::new("required"));
                Err(errors)
            }
        }
    }
}
