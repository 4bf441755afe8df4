//! # Domain Entities Module
//!
//! 저장소에 영구 저장되는 도메인 엔티티를 정의합니다.
//!
//! | 엔티티 | 저장 위치 | 설명 |
//! |--------|-----------|------|
//! | [`AccountRecord`](accounts::AccountRecord) | `reviewer_account` | 가입한 계정 |

pub mod accounts;

pub use accounts::*;
