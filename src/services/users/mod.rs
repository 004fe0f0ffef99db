//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성과 조회의 비즈니스 로직을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_registry_service::repositories::users::InMemoryUserStore;
//! use user_registry_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let response = service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
