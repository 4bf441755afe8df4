//! 에러 타입 모듈
//!
//! [`AppError`](errors::AppError)와 관련 헬퍼를 재노출합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
