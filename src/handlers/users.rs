//! # User HTTP Handlers
//!
//! 사용자 생성/목록 조회 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users/` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users/` | 전체 사용자 목록 조회 | 200 OK |
//!
//! 핸들러는 [`UserService`]만 호출하며, 검증 실패는 [`AppError`]를 통해
//! 위반 필드 전체를 열거하는 422 응답으로 자동 변환됩니다.

use actix_web::{get, post, web, HttpResponse};

use crate::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// 요청 본문을 `CreateUserRequest` 스키마로 검증한 뒤 레코드를 저장소에
/// 추가하고, 민감 필드가 제거된 뷰를 반환합니다.
///
/// # 엔드포인트
///
/// `POST /users/`
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "username": "johndoe",
///   "email": "john@example.com",
///   "full_name": "John Doe",
///   "join_date": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 검증 실패 (422 Unprocessable Entity)
/// ```json
/// {
///   "error": "validation_error",
///   "message": "입력 데이터가 유효하지 않습니다",
///   "details": {
///     "email": ["유효한 이메일 주소를 입력해주세요"],
///     "password": ["비밀번호는 필수 입력 항목입니다"]
///   }
/// }
/// ```
#[utoipa::path(
    context_path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "사용자 생성 성공", body = UserResponse),
        (status = 422, description = "요청 본문 검증 실패 (위반 필드 전체 열거)"),
    ),
)]
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// 저장된 모든 사용자를 삽입 순서대로 반환합니다. 각 레코드는
/// `UserResponse`로 프로젝션되어 `password_marker`가 제거됩니다.
/// 페이지네이션은 없으며, 저장소가 비어 있으면 빈 배열을 반환합니다.
///
/// # 엔드포인트
///
/// `GET /users/`
#[utoipa::path(
    context_path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "전체 사용자 목록 (삽입 순서)", body = [UserResponse]),
    ),
)]
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}
