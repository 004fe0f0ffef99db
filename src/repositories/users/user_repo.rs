//! # 사용자 저장소 구현
//!
//! 사용자 레코드의 데이터 액세스 계층입니다. 이 데모의 "데이터베이스"는
//! 프로세스 전역의 append-only 인메모리 리스트이며, 프로세스 종료와 함께
//! 사라집니다.
//!
//! ## 특징
//!
//! - **append-only**: 추가와 전체 조회만 존재. 수정/삭제/질의 없음
//! - **유일성 없음**: 동일한 username/email 레코드가 공존 가능
//! - **무제한 성장**: 용량 제한 없음
//! - **삽입 순서 보존**: 조회는 삽입 순서 그대로의 스냅샷 반환
//!
//! [`UserStore`] trait이 저장소와 요청 파이프라인 사이의 경계입니다.
//! 영속적이고 동시성 안전한 실제 저장소로 교체할 때 파이프라인 코드를
//! 건드리지 않도록 이 seam을 유지합니다.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 사용자 저장소 인터페이스
///
/// 요청 파이프라인이 의존하는 유일한 저장소 계약입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 레코드를 저장소 끝에 추가하고 저장된 레코드를 돌려줍니다
    async fn append(&self, user: User) -> Result<User, AppError>;

    /// 현재 보관 중인 전체 레코드의 스냅샷을 삽입 순서로 반환합니다
    async fn list_all(&self) -> Result<Vec<User>, AppError>;
}

/// 인메모리 사용자 저장소
///
/// `Mutex<Vec<User>>` 하나가 전부입니다. 핸들러가 외부 I/O 없이 즉시
/// 완료되므로 lock을 `.await` 너머로 들고 가는 일이 없습니다.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// 빈 저장소를 생성합니다
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn append(&self, user: User) -> Result<User, AppError> {
        let mut users = self
            .users
            .lock()
            .map_err(|e| AppError::InternalError(format!("사용자 저장소 lock 획득 실패: {}", e)))?;

        users.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let users = self
            .users
            .lock()
            .map_err(|e| AppError::InternalError(format!("사용자 저장소 lock 획득 실패: {}", e)))?;

        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User::new(
            username.to_string(),
            format!("{}@example.com", username),
            None,
            "hashed_pw".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_empty_store_lists_nothing() {
        let store = InMemoryUserStore::new();

        let all = store.list_all().await.expect("list should succeed");
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn test_append_returns_stored_record() {
        let store = InMemoryUserStore::new();

        let stored = store.append(user("johndoe")).await.expect("append");
        assert_eq!(stored.username, "johndoe");
    }

    #[actix_web::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryUserStore::new();
        store.append(user("first")).await.expect("append");
        store.append(user("second")).await.expect("append");
        store.append(user("third")).await.expect("append");

        let all = store.list_all().await.expect("list");
        let usernames: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["first", "second", "third"]);
    }

    #[actix_web::test]
    async fn test_duplicates_are_allowed() {
        let store = InMemoryUserStore::new();
        store.append(user("johndoe")).await.expect("append");
        store.append(user("johndoe")).await.expect("append");

        let all = store.list_all().await.expect("list");
        assert_eq!(all.len(), 2);
    }
}
