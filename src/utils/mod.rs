//! 유틸리티 모듈
//!
//! 특정 계층에 속하지 않는 보조 함수들을 제공합니다.

pub mod password_marker;
