//! 사용자 응답 DTO
//!
//! 저장된 [`User`] 엔티티의 외부 공개 뷰를 정의합니다.
//! `password_marker`를 제거하는 명시적 프로젝션이 이 시스템의 유일한
//! 기밀성 경계이므로, 선언적 직렬화 설정이 아닌 감사 가능한 변환 함수
//! (`From<User>`)로 구현합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// [`User`]에서 필드 화이트리스트 방식으로 파생됩니다.
/// `password_marker`는 어떤 경우에도 이 뷰에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    /// 전체 이름 (부재 시 null로 직렬화)
    #[schema(example = "John Doe")]
    pub full_name: Option<String>,
    /// 가입 시각
    pub join_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        // password_marker는 `..`로 명시적으로 버려진다
        let User {
            username,
            email,
            full_name,
            join_date,
            ..
        } = user;

        Self {
            username,
            email,
            full_name,
            join_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "johndoe".to_string(),
            "john@example.com".to_string(),
            Some("John Doe".to_string()),
            "hashed_securepassword123".to_string(),
        )
    }

    #[test]
    fn test_projection_keeps_public_fields() {
        let user = sample_user();
        let join_date = user.join_date;
        let response = UserResponse::from(user);

        assert_eq!(response.username, "johndoe");
        assert_eq!(response.email, "john@example.com");
        assert_eq!(response.full_name.as_deref(), Some("John Doe"));
        assert_eq!(response.join_date, join_date);
    }

    #[test]
    fn test_projection_drops_password_marker() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).expect("serializable");
        let object = json.as_object().expect("json object");

        assert!(!object.contains_key("password_marker"));
        assert!(!object.contains_key("password"));
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_absent_full_name_serializes_as_null() {
        let mut user = sample_user();
        user.full_name = None;

        let json = serde_json::to_value(UserResponse::from(user)).expect("serializable");
        assert!(json.get("full_name").expect("field present").is_null());
    }
}
