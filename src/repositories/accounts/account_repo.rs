//! # 계정 리포지토리 구현
//!
//! 계정 레코드의 데이터 액세스 계층입니다.
//! 가입 흐름이 필요로 하는 연산은 "사용자명으로 조회"와 "삽입" 두 가지뿐이며,
//! [`AccountStore`] trait으로 추상화되어 핸들러에 주입됩니다.
//!
//! ## 구현체
//!
//! - [`MongoAccountRepository`] - MongoDB 컬렉션 (`reviewer_account`)
//! - [`InMemoryAccountStore`](super::memory_store::InMemoryAccountStore) - 로컬 실행/테스트용
//!
//! ## 사용자명 중복 경쟁 조건
//!
//! 조회와 삽입은 트랜잭션으로 묶이지 않습니다. 동시에 같은 사용자명으로 가입하면
//! 둘 다 조회를 통과할 수 있으므로, MongoDB 구현은 `USERNAME` 유니크 인덱스를 만들고
//! 중복 키 에러(11000)를 [`AppError::ConflictError`]로 변환합니다.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::accounts::account::{columns, AccountRecord};
use crate::errors::AppError;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 계정 저장소 인터페이스
///
/// 프로세스 시작 시 한 번 생성되어 `Arc<dyn AccountStore>`로 공유됩니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 사용자명으로 계정을 조회합니다.
    ///
    /// * `Ok(Some(record))` - 계정이 존재함
    /// * `Ok(None)` - 계정 없음
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    async fn find_by_username(&self, username: &str) -> Result<Option<AccountRecord>, AppError>;

    /// 사용자명이 이미 사용 중인지 확인합니다.
    ///
    /// 레코드 전체가 필요 없는 중복 검사용입니다.
    async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// 새 계정을 삽입합니다.
    ///
    /// 사용자명이 이미 존재하면 `AppError::ConflictError`를 반환합니다.
    async fn insert(&self, record: AccountRecord) -> Result<(), AppError>;
}

/// MongoDB 기반 계정 리포지토리
pub struct MongoAccountRepository {
    collection: Collection<AccountRecord>,
}

impl MongoAccountRepository {
    /// 주어진 데이터베이스의 컬렉션에 연결된 리포지토리를 만듭니다.
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.get_database().collection::<AccountRecord>(collection_name),
        }
    }

    /// `USERNAME` 유니크 인덱스를 생성합니다.
    ///
    /// 이미 같은 인덱스가 있으면 아무 일도 일어나지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "USERNAME": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(username_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ {} 컬렉션 인덱스 준비 완료", self.collection.name());
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MongoAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AccountRecord>, AppError> {
        let mut filter = Document::new();
        filter.insert(columns::USERNAME, username);

        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// `USERNAME` 컬럼만 읽으므로 다른 컬럼이 누락된 레코드도 중복으로 판정됩니다.
    async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        let mut filter = Document::new();
        filter.insert(columns::USERNAME, username);

        let mut projection = doc! { "_id": 0 };
        projection.insert(columns::USERNAME, 1);

        let found = self.collection
            .clone_with_type::<Document>()
            .find_one(filter)
            .projection(projection)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn insert(&self, record: AccountRecord) -> Result<(), AppError> {
        self.collection
            .insert_one(&record)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!("username {} already exists", record.username))
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        debug!("계정 삽입 완료: {}", record.username);
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
