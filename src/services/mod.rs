//! 비즈니스 로직 계층 모듈

pub mod users;
