//! 사용자 저장소 모듈
//!
//! [`UserStore`](user_repo::UserStore) trait과 인메모리 구현체
//! [`InMemoryUserStore`](user_repo::InMemoryUserStore)를 제공합니다.

pub mod user_repo;

pub use user_repo::{InMemoryUserStore, UserStore};
