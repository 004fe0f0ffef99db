//! 사용자 레지스트리 데모 서비스
//!
//! 요청/응답 스키마 선언과 프레임워크 기반 검증/직렬화를 보여주는
//! 교육용 HTTP 서비스입니다. 인증도, 영속성도, 유일성 검증도 없습니다 -
//! "데이터베이스"는 프로세스 수명과 함께하는 append-only 인메모리 리스트입니다.
//!
//! # Features
//!
//! - **스키마 검증**: `validator` 기반 전수 검증 (위반 필드 전체를 한 번에 보고)
//! - **응답 프로젝션**: 민감 필드(`password_marker`)를 제거하는 명시적 변환
//! - **인메모리 저장소**: trait 경계 뒤의 append-only 리스트
//! - **OpenAPI 문서**: 스키마 선언의 부산물로 `/docs`, `/openapi.json` 자동 노출
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 → 저장 → 프로젝션 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 append-only 저장소
//! └─────────────────┘
//! ```
//!
//! ⚠️ 비밀번호 처리는 의도적으로 안전하지 않은 데모 동작입니다
//! ([`utils::password_marker`] 참고). 실제 서비스 용도가 아닙니다.

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
