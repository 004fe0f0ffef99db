//! 사용자 레지스트리 데모 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 인메모리 저장소를 초기화하고
//! 검증/프로젝션 파이프라인을 제공하는 REST API를 노출합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use user_registry_service::config::ServerConfig;
use user_registry_service::repositories::users::{InMemoryUserStore, UserStore};
use user_registry_service::routes::{configure_all_routes, json_config};
use user_registry_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    dotenv().ok();
    init_logging();

    info!("🚀 사용자 레지스트리 데모 서비스 시작중...");

    // 인메모리 저장소 초기화 - 프로세스 종료와 함께 내용이 사라진다
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let user_service = web::Data::new(UserService::new(store));

    info!("✅ 인메모리 저장소 준비 완료");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// `NormalizePath::trim` 덕분에 `/users`와 `/users/`가 동일하게 처리됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Liveness check: http://{}/", bind_address);
    info!("📍 API Docs: http://{}/docs/", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 공유 상태 및 JSON 추출 설정
            .app_data(user_service.clone())
            .app_data(json_config())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 개발 환경에서의 브라우저 접근을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
