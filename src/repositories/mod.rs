//! 데이터 액세스 계층을 담당하는 저장소 모듈
//!
//! 이 데모의 저장소는 프로세스 수명과 함께하는 인메모리 리스트 하나뿐입니다.
//! trait 경계([`users::UserStore`])를 통해 서비스 계층과 분리되어 있어
//! 실제 데이터베이스 구현으로 교체할 수 있습니다.

pub mod users;
