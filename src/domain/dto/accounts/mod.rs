//! 계정 관련 DTO 모듈
//!
//! 가입 요청 본문의 필드 정의와 정규화된 요청 타입을 제공합니다.

pub mod request;

pub use request::*;
