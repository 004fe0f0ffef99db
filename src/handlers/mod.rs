//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청/응답 변환만 담당하고, 비즈니스 로직은 서비스 계층에
//! 위임합니다.
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증/저장/프로젝션 파이프라인          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 인메모리 저장소                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```

pub mod users;
