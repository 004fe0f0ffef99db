//! 데모용 비밀번호 마커 파생
//!
//! ⚠️ 이 모듈은 의도적으로 안전하지 않습니다.
//!
//! 원본 데모의 동작을 그대로 유지하기 위해 비밀번호에 `"hashed_"` 접두사를
//! 붙이는 것이 전부입니다. 실제 해싱(bcrypt, argon2 등)으로 몰래 업그레이드하지
//! 않는 것이 이 저장소의 설계 결정입니다 - 교육용 예제이지 보안 구현이 아닙니다.
//! 파생된 마커는 어떤 경우에도 HTTP 응답에 포함되지 않습니다.

/// 데모 마커 접두사
const MARKER_PREFIX: &str = "hashed_";

/// 평문 비밀번호로부터 데모용 마커 문자열을 파생합니다
///
/// 암호학적 해시가 아닙니다. 원문이 그대로 드러나는 단순 문자열 접합이므로
/// 절대 실제 서비스에서 사용하면 안 됩니다.
///
/// # Examples
///
/// ```
/// use user_registry_service::utils::password_marker::mark_password;
///
/// assert_eq!(mark_password("securepassword123"), "hashed_securepassword123");
/// ```
pub fn mark_password(raw_password: &str) -> String {
    format!("{}{}", MARKER_PREFIX, raw_password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_password_prepends_prefix() {
        assert_eq!(mark_password("securepassword123"), "hashed_securepassword123");
    }

    #[test]
    fn test_mark_password_empty_input() {
        assert_eq!(mark_password(""), "hashed_");
    }
}
