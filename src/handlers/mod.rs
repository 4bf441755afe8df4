//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 본문 해석, 봉투 반환          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 해싱, 저장 흐름                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - AccountStore                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 에러를 전송 계층으로 전파하지 않습니다. 모든 결과는
//! [`ResponseEnvelope`](crate::domain::dto::response::ResponseEnvelope)로 변환되어 HTTP 200으로 응답됩니다.

pub mod authentication;
