//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 보관되는 사용자 레코드
//! └── dto       - API 계약 정의 (Request/Response)
//! ```
//!
//! 요청 DTO → 엔티티 → 응답 DTO의 변환이 이 계층 안에서만 일어나며,
//! 민감 필드(`password_marker`)는 응답 DTO 프로젝션에서 제거됩니다.

pub mod dto;
pub mod entities;
