//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 요청/응답의 계약을 정의하는 모듈입니다.
//!
//! ```text
//! dto/
//! ├── accounts/   ← 가입 요청 필드 정의와 정규화
//! └── response/   ← 공통 응답 봉투
//! ```

pub mod accounts;
pub mod response;

pub use accounts::*;
pub use response::*;
