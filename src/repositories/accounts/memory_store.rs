//! 메모리 기반 계정 저장소
//!
//! `ACCOUNT_STORE=memory`로 실행하거나 테스트에서 사용합니다.
//! 조회-삽입 중복 검사는 하나의 잠금 안에서 이루어집니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use crate::domain::entities::AccountRecord;
use crate::errors::{AppError, ErrorContext};
use super::account_repo::AccountStore;

/// 사용자명을 키로 하는 메모리 저장소
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: Mutex<HashMap<String, AccountRecord>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 채워진 저장소를 만듭니다.
    pub fn with_records(records: impl IntoIterator<Item = AccountRecord>) -> Self {
        let accounts = records
            .into_iter()
            .map(|record| (record.username.clone(), record))
            .collect();

        Self {
            accounts: Mutex::new(accounts),
        }
    }

    /// 저장된 계정 수
    pub fn len(&self) -> usize {
        self.lock().map(|accounts| accounts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, AccountRecord>>, AppError> {
        self.accounts
            .lock()
            .context("account store lock poisoned")
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<AccountRecord>, AppError> {
        Ok(self.lock()?.get(username).cloned())
    }

    async fn insert(&self, record: AccountRecord) -> Result<(), AppError> {
        let mut accounts = self.lock()?;

        if accounts.contains_key(&record.username) {
            return Err(AppError::ConflictError(format!(
                "username {} already exists",
                record.username
            )));
        }

        accounts.insert(record.username.clone(), record);
        Ok(())
    }
}
