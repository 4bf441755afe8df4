//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 변환 유틸리티
//! - [`validators`] - JSON 본문 필수 필드/타입 검증
//! - [`display_terminal`] - 시작 로그 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validators::{validate_required, FieldLabels};
//!
//! let errors = validate_required(&body, &["username"], &FieldLabels::new(&[]));
//! ```

pub mod string_utils;
pub mod validators;
pub mod display_terminal;
