//! 데이터 전송 객체(DTO) 모듈
//!
//! API 계약을 정의하는 요청/응답 구조체들을 제공합니다.
//! 요청 DTO는 `validator`로 입력을 검증하고, 응답 DTO는 엔티티의
//! 공개 가능한 필드만 노출하는 프로젝션을 담당합니다.

pub mod users;
