//! # Configuration Module
//!
//! 가입 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 계정 저장소, 패스워드 해싱 설정
//! - [`server_config`] - 서버 바인딩, CORS, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="5001"
//!
//! # 저장소 설정
//! export ACCOUNT_STORE="mongodb"          # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="reviewer_dev"
//! export ACCOUNT_COLLECTION="reviewer_account"
//!
//! # 보안 설정
//! export BCRYPT_COST="10"                 # 4-31 범위
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod server_config;

pub use data_config::*;
pub use server_config::*;
