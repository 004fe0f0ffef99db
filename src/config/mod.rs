//! 서버 설정 관리 모듈
//!
//! 바인딩 주소 등 서버 실행에 필요한 설정을 환경변수에서 읽어옵니다.
//! 이 데모는 설정 파일 없이도 기본값만으로 동작합니다.

use std::env;

use log::error;

/// 기본 포트
const DEFAULT_PORT: u16 = 8080;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        match env::var("PORT") {
            Ok(raw) => parse_port(&raw),
            Err(_) => DEFAULT_PORT,
        }
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소를 반환합니다.
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// PORT 환경변수 값을 파싱합니다
///
/// 파싱에 실패하면 로그를 남기고 기본값으로 대체합니다.
fn parse_port(raw: &str) -> u16 {
    raw.parse::<u16>().unwrap_or_else(|e| {
        error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_PORT);
        DEFAULT_PORT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_parse_port_accepts_valid_value() {
        assert_eq!(parse_port("9090"), 9090);
    }

    #[test]
    fn test_parse_port_falls_back_on_garbage() {
        assert_eq!(parse_port("not-a-number"), DEFAULT_PORT);
        assert_eq!(parse_port(""), DEFAULT_PORT);
        assert_eq!(parse_port("70000"), DEFAULT_PORT);
    }

    #[test]
    fn test_bind_address_format() {
        let address = ServerConfig::bind_address();
        assert!(address.contains(':'));
    }
}
