//! 응답 DTO 모듈
//!
//! 모든 엔드포인트가 공유하는 [`ResponseEnvelope`](envelope::ResponseEnvelope)와
//! 빌더 함수들을 제공합니다.

pub mod envelope;

pub use envelope::{EntityKind, MissingContentKind, Outcome, ResponseEnvelope};
