//! Accounts Entity Module
//!
//! 가입으로 생성되는 [`AccountRecord`](account::AccountRecord) 엔티티를 정의합니다.

pub mod account;

pub use account::AccountRecord;
