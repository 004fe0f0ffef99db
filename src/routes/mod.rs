//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 라우트, 루트 헬스체크, 그리고 스키마 선언의 부산물인
//! OpenAPI 문서 엔드포인트를 포함합니다.
//!
//! # Available Routes
//!
//! - `GET /` - 서버 동작 확인 (고정 메시지)
//! - `POST /users/` - 사용자 생성
//! - `GET /users/` - 전체 사용자 목록 조회
//! - `GET /docs/` - Swagger UI (자동 생성)
//! - `GET /openapi.json` - 기계 판독 가능한 OpenAPI 스키마
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use user_registry_service::routes::configure_all_routes;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::AppError;
use crate::handlers;

/// OpenAPI 문서 정의
///
/// DTO의 `ToSchema`와 핸들러의 `#[utoipa::path]` 선언으로부터 자동 생성됩니다.
/// 별도로 설계된 문서가 아니라 스키마 계층 선언의 부산물입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry Service",
        description = "요청 스키마 검증과 응답 프로젝션을 보여주는 데모 사용자 레지스트리"
    ),
    paths(
        health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
    ),
    components(schemas(
        crate::domain::dto::users::request::CreateUserRequest,
        crate::domain::dto::users::response::UserResponse,
    )),
    tags((name = "users", description = "사용자 생성 및 조회"))
)]
pub struct ApiDoc;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);

    // OpenAPI 문서 (Swagger UI + JSON 스키마)
    // SwaggerUi 리소스는 `/docs/` 접두사가 있는 경로만 매칭하고,
    // NormalizePath::trim은 `/docs/`를 `/docs`로 줄이므로
    // UI 진입점은 명시적 리다이렉트로 연결한다
    cfg.service(web::redirect("/docs", "/docs/index.html"));
    cfg.service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()));
}

/// 사용자 관련 라우트를 설정합니다
///
/// `NormalizePath::trim` 미들웨어와 함께 사용되므로 `/users`와 `/users/`가
/// 동일하게 처리됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users),
    );
}

/// JSON 본문 추출 설정
///
/// 파싱 불가능한 본문을 actix 기본값(400)이 아닌 검증 실패와 동일한
/// 422 응답으로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::MalformedJson(err.to_string()).into())
}

/// 서버 동작을 확인하는 루트 엔드포인트
///
/// 저장소 상태와 무관하게 항상 고정 메시지를 반환합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/
/// ```
///
/// Response:
/// ```json
/// {"message": "User registry server is running!"}
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "서버 동작 중")),
)]
#[actix_web::get("/")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "User registry server is running!"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_returns_fixed_message() {
        let app = test::init_service(App::new().service(health_check)).await;

        let request = test::TestRequest::get().uri("/").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "User registry server is running!");
    }

    #[actix_web::test]
    async fn test_docs_ui_entry_redirects_under_trimmed_paths() {
        let app = test::init_service(
            App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(configure_all_routes),
        )
        .await;

        // trim 미들웨어가 `/docs/`도 `/docs`로 줄이므로 두 표기 모두 이 경로를 탄다
        for uri in ["/docs", "/docs/"] {
            let request = test::TestRequest::get().uri(uri).to_request();
            let response = test::call_service(&app, request).await;

            assert!(
                response.status().is_redirection(),
                "{} 응답: {}",
                uri,
                response.status()
            );

            let location = response
                .headers()
                .get(actix_web::http::header::LOCATION)
                .expect("location header");
            assert_eq!(location, "/docs/index.html");
        }
    }

    #[actix_web::test]
    async fn test_openapi_schema_is_served() {
        let app = test::init_service(App::new().configure(|cfg| {
            cfg.service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()));
        }))
        .await;

        let request = test::TestRequest::get().uri("/openapi.json").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["paths"].as_object().expect("paths").contains_key("/users"));
    }
}
