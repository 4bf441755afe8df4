//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`](crate::config::DatabaseConfig)에서 읽어옵니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new().await?;
//! let repo = MongoAccountRepository::new(&database, "reviewer_account");
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 프로세스 시작 시 한 번 생성되고, 리포지토리가 컬렉션 핸들을 얻는 데 사용됩니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 환경 설정을 사용해 새 MongoDB 연결을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "reviewer_dev")
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        Self::connect(&DatabaseConfig::uri(), DatabaseConfig::database_name()).await
    }

    /// 주어진 URI와 데이터베이스 이름으로 연결하고 ping으로 연결을 검증합니다.
    pub async fn connect(uri: &str, database_name: String) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("account_service".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 클라이언트 연결을 종료합니다.
    ///
    /// 서버 종료 시 한 번 호출됩니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB 연결 종료: {}", self.database_name);
    }
}
