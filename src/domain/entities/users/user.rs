//! User Entity Implementation
//!
//! 데모 저장소에 보관되는 사용자 레코드의 핵심 구현체입니다.
//! 생성 이후 수정되거나 삭제되지 않는 append-only 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 저장소가 보관하는 사용자 레코드입니다. 생성 시점에 단 한 번 만들어지며
/// 이후 수정/삭제 연산이 존재하지 않습니다.
///
/// `password_marker`는 실제 해시가 아닌 데모용 플레이스홀더 문자열입니다.
/// 응답으로 직렬화되는 타입이 아니며, 외부 노출은 반드시
/// [`UserResponse`](crate::domain::dto::users::response::UserResponse) 프로젝션을 거칩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 이름
    pub username: String,
    /// 사용자 이메일 (중복 허용 - 유일성 검증 없음)
    pub email: String,
    /// 전체 이름 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// 가입 시각 (생성 시점의 서버 시계)
    pub join_date: DateTime<Utc>,
    /// 데모용 비밀번호 마커 (암호학적 해시 아님, 응답에 절대 포함 금지)
    pub password_marker: String,
}

impl User {
    /// 새 사용자 레코드 생성
    ///
    /// `join_date`는 호출 시점의 서버 시계로 채워집니다.
    /// `password_marker`는 이미 파생이 끝난 값을 받습니다
    /// ([`mark_password`](crate::utils::password_marker::mark_password) 참고).
    pub fn new(
        username: String,
        email: String,
        full_name: Option<String>,
        password_marker: String,
    ) -> Self {
        Self {
            username,
            email,
            full_name,
            join_date: Utc::now(),
            password_marker,
        }
    }
}
