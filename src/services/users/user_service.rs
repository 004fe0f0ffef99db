//! # 사용자 관리 서비스 구현
//!
//! 검증 → 저장 → 프로젝션으로 이어지는 요청 파이프라인의 비즈니스 로직을
//! 담당합니다.
//!
//! ```text
//! CreateUserRequest ──validate──▶ NewUser ──build──▶ User ──append──▶ Store
//!                                                     │
//!                                                     ▼
//!                                               UserResponse (projection)
//! ```
//!
//! 생성은 all-or-nothing입니다: 검증에 실패하면 저장소에 아무것도 기록되지
//! 않고, 성공하면 레코드 전체가 저장된 뒤 프로젝션되어 반환됩니다.

use std::sync::Arc;

use log::{debug, info};

use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::users::UserStore;
use crate::utils::password_marker::mark_password;

/// 사용자 관리 서비스
///
/// [`UserStore`] 구현체를 주입받아 동작합니다. 핸들러는 이 서비스만 호출하며
/// 저장소 구현을 직접 알지 못합니다.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// 주어진 저장소로 서비스를 생성합니다
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 새 사용자를 생성합니다
    ///
    /// 1. 요청 본문을 전수 검증 (위반 필드 전체를 한 번에 보고)
    /// 2. `join_date`를 현재 서버 시각으로, `password_marker`를 데모용
    ///    플레이스홀더로 채운 [`User`] 레코드 구성
    /// 3. 저장소에 추가
    /// 4. 민감 필드를 제거한 [`UserResponse`]로 프로젝션
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationFailed` - 검증 실패. 저장소는 변경되지 않음
    /// * `AppError::InternalError` - 저장소 접근 실패
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let new_user = request.into_new_user()?;

        debug!("사용자 생성 요청 검증 통과: {}", new_user.username);

        let user = User::new(
            new_user.username,
            new_user.email,
            new_user.full_name,
            mark_password(&new_user.password),
        );

        let stored = self.store.append(user).await?;
        info!("사용자 생성됨: {}", stored.username);

        Ok(UserResponse::from(stored))
    }

    /// 저장된 모든 사용자를 삽입 순서대로 반환합니다
    ///
    /// 각 레코드는 [`UserResponse`]로 프로젝션되어 `password_marker`가
    /// 제거된 상태로 반환됩니다. 저장소가 비어 있으면 빈 목록을 반환합니다.
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.store.list_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
