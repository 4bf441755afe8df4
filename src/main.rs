//! 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 계정 저장소와 가입 서비스를 초기화합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use account_service_backend::config::{
    CorsConfig, DatabaseConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use account_service_backend::db::Database;
use account_service_backend::repositories::accounts::{
    AccountStore, InMemoryAccountStore, MongoAccountRepository,
};
use account_service_backend::routes::configure_all_routes;
use account_service_backend::services::accounts::SignupService;
use account_service_backend::utils::display_terminal::{log_boxed_title, log_step_complete};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    log_boxed_title("Account Service");

    // 계정 저장소 초기화
    let (store, database) = initialize_account_store().await?;

    let signup_service = web::Data::new(SignupService::from_env(store));
    log_step_complete(
        2,
        "Signup service ready",
        &format!("bcrypt cost {}", signup_service.bcrypt_cost()),
    );

    // HTTP 서버 시작
    let result = start_http_server(signup_service).await;

    if let Some(database) = database {
        database.shutdown().await;
    }

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(signup_service: web::Data<SignupService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Sign-up: http://{}/api/authentication/sign-up", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(signup_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 출력합니다
    let outcome = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match outcome {
        Ok(file) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (환경 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=account_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `ACCOUNT_STORE` 설정에 따라 계정 저장소를 초기화합니다
///
/// MongoDB 저장소를 사용하면 연결을 검증하고 사용자명 고유 인덱스를 생성합니다.
/// 종료 시 연결을 닫을 수 있도록 [`Database`]도 함께 반환합니다.
///
/// # Errors
///
/// * MongoDB 연결 실패 또는 인덱스 생성 실패
async fn initialize_account_store()
    -> std::io::Result<(Arc<dyn AccountStore>, Option<Database>)>
{
    match StorageBackend::current() {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e)
            })?;

            let collection = DatabaseConfig::account_collection();
            let repository = MongoAccountRepository::new(&database, &collection);
            repository.create_indexes().await.map_err(|e| {
                error!("계정 인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            log_step_complete(
                1,
                "Account store ready",
                &format!("mongodb {}.{}", database.database_name(), collection),
            );

            Ok((Arc::new(repository), Some(database)))
        }
        StorageBackend::Memory => {
            log_step_complete(1, "Account store ready", "memory");
            Ok((Arc::new(InMemoryAccountStore::new()), None))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin 목록이 비어 있으면 모든 Origin을 허용합니다.
///
/// ```rust,ignore
/// let cors = configure_cors(&CorsConfig::allowed_origins());
/// App::new().wrap(cors)
/// ```
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
