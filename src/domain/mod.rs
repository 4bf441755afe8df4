//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 영구 저장되는 객체
//! └── DTOs          - 요청 필드 정의, 응답 봉투
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;

pub use entities::AccountRecord;
pub use dto::ResponseEnvelope;
