//! 계정 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::accounts::{AccountStore, InMemoryAccountStore};
//!
//! let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
//! let existing = store.find_by_username("test.account").await?;
//! ```

pub mod account_repo;
pub mod memory_store;

pub use account_repo::{AccountStore, MongoAccountRepository};
pub use memory_store::InMemoryAccountStore;
