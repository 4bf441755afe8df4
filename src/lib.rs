//! 계정 서비스 백엔드
//!
//! Rust 기반의 계정 가입 서비스입니다.
//! 가입 요청의 필드/도메인 검증, bcrypt 패스워드 해싱, 계정 저장,
//! 그리고 일관된 JSON 응답 봉투를 제공합니다.
//!
//! # Features
//!
//! - **계정 가입**: `POST /api/authentication/sign-up`
//! - **검증**: 필수 필드, 타입, 사용자명 길이/중복, 패스워드 길이
//! - **응답 봉투**: `{ success, code?, info: { message, errors?, responseObject? } }`
//! - **MongoDB**: 계정 데이터 영구 저장 (메모리 저장소로 교체 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 본문 해석
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 해싱, 응답 봉투 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore 구현체
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service_backend::repositories::accounts::InMemoryAccountStore;
//! use account_service_backend::services::accounts::SignupService;
//!
//! let service = SignupService::from_env(Arc::new(InMemoryAccountStore::new()));
//! let envelope = service.signup(&body).await;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
