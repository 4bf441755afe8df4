//! API 라우트 설정 모듈
//!
//! 인증(가입) 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/authentication/sign-up` - 계정 가입
//! - 그 외 경로 - "not found" 응답 봉투
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(signup_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;
use crate::domain::dto::response::envelope::{self, ResponseEnvelope};
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_authentication_routes(cfg);

    cfg.default_service(web::to(route_not_found));
}

/// 인증 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:5001/api/authentication/sign-up \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Test Account","emailAddress":"test.account@gmail.com","username":"test.account","password":"secret123"}'
/// ```
fn configure_authentication_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/authentication")
            .service(handlers::authentication::sign_up)
    );
}

/// 등록되지 않은 경로에 대한 응답
async fn route_not_found() -> ResponseEnvelope {
    envelope::not_found(None, Some("The requested route was not found."))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
