//! 계정 요청 DTO 모듈

pub mod signup_request;

pub use signup_request::{SignupRequest, SIGNUP_FIELD_LABELS, REQUIRED_FIELDS, STRING_FIELDS};
