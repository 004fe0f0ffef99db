//! 도메인 엔티티 모듈
//!
//! 비즈니스의 핵심 개념을 나타내는 객체들을 정의합니다.
//! 이 데모에서는 인메모리 저장소에 보관되는 [`users::User`] 하나만 존재합니다.

pub mod users;
