//! 계정 가입 비즈니스 로직 모듈
//!
//! - [`signup_validator`] - 가입 요청 도메인 검증
//! - [`signup_service`] - 검증, 해싱, 저장, 응답 봉투 생성 흐름

pub mod signup_validator;
pub mod signup_service;

pub use signup_service::SignupService;
pub use signup_validator::validate_signup;
