//! 데이터 및 보안 설정 관리 모듈
//!
//! 데이터베이스, 계정 저장소, 패스워드 해싱 관련 설정을 관리합니다.

use std::env;

/// 기본 bcrypt cost (salt rounds)
pub const DEFAULT_BCRYPT_COST: u32 = 10;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 설정된 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 4-31 범위의 값이면 그 값을,
    /// 그렇지 않으면 [`DEFAULT_BCRYPT_COST`]를 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
    }

    /// 문자열 값에서 bcrypt cost를 해석합니다.
    pub fn parse_cost(raw: Option<&str>) -> u32 {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(cost))
            .unwrap_or(DEFAULT_BCRYPT_COST)
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: "reviewer_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "reviewer_dev".to_string())
    }

    /// 계정 컬렉션 이름. 기본값: "reviewer_account"
    pub fn account_collection() -> String {
        env::var("ACCOUNT_COLLECTION").unwrap_or_else(|_| "reviewer_account".to_string())
    }
}

/// 계정 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션
    MongoDb,
    /// 프로세스 메모리 (로컬 실행 및 테스트용)
    Memory,
}

impl StorageBackend {
    /// `ACCOUNT_STORE` 환경 변수에서 저장소 종류를 결정합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ACCOUNT_STORE").unwrap_or_default())
    }

    /// 문자열에서 저장소 종류를 생성합니다. 알 수 없는 값은 `MongoDb`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}
