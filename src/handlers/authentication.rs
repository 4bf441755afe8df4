//! Authentication HTTP Handlers
//!
//! 계정 가입 엔드포인트를 처리하는 핸들러입니다.
//!
//! # Endpoint
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/authentication/sign-up` | 새 계정 생성 |
//!
//! 모든 응답은 HTTP 200이며, 논리적 상태는 응답 봉투의 `success`/`code`에 담깁니다.
//!
//! # 본문 처리
//!
//! - 빈 본문, `null`, `{}` → "Request body is empty." (400)
//! - JSON 파싱 실패 또는 객체가 아닌 JSON → "A bad request was made. Try again." (400)
//! - 그 외 → [`SignupService::signup`]

use actix_web::{post, web};
use log::debug;
use serde_json::{Map, Value};
use crate::domain::dto::response::envelope::{self, MissingContentKind, ResponseEnvelope};
use crate::services::accounts::SignupService;

/// 가입 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "fullName": "Test Account",
///   "emailAddress": "test.account@gmail.com",
///   "username": "test.account",
///   "password": "test.account.password"
/// }
/// ```
///
/// # 응답
///
/// ```json
/// {
///   "success": "ok",
///   "info": {
///     "message": "Your account successfully created.",
///     "responseObject": { "fullName": "Test Account", "...": "..." }
///   }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:5001/api/authentication/sign-up \
///   -H "Content-Type: application/json" \
///   -d '{"fullName":"Test Account","emailAddress":"test.account@gmail.com","username":"test.account","password":"test.account.password"}'
/// ```
#[post("/sign-up")]
pub async fn sign_up(
    service: web::Data<SignupService>,
    body: web::Bytes,
) -> ResponseEnvelope {
    match parse_body(&body) {
        Ok(request) => service.signup(&request).await,
        Err(response) => response,
    }
}

/// 요청 본문을 JSON 객체로 해석합니다.
fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, ResponseEnvelope> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(envelope::missing_content(MissingContentKind::RequestBody));
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) if map.is_empty() => {
            Err(envelope::missing_content(MissingContentKind::RequestBody))
        }
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Err(envelope::missing_content(MissingContentKind::RequestBody)),
        Ok(other) => {
            debug!("객체가 아닌 가입 요청 본문: {}", other);
            Err(envelope::bad_request(None))
        }
        Err(e) => {
            debug!("가입 요청 본문 파싱 실패: {}", e);
            Err(envelope::bad_request(None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{test, App};
    use serde_json::json;
    use crate::domain::entities::AccountRecord;
    use crate::repositories::accounts::{AccountStore, InMemoryAccountStore};
    use crate::routes::configure_all_routes;

    const TEST_COST: u32 = 4;

    fn service_with(store: Arc<InMemoryAccountStore>) -> web::Data<SignupService> {
        web::Data::new(SignupService::new(store, TEST_COST))
    }

    async fn post_json(store: Arc<InMemoryAccountStore>, body: Value) -> (actix_web::http::StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(service_with(store))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/authentication/sign-up")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();

        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_sign_up_successfully() {
        let store = Arc::new(InMemoryAccountStore::new());
        let request_body = json!({
            "fullName": "Test Account",
            "emailAddress": "test.account@gmail.com",
            "username": "test.account",
            "password": "test.account.password"
        });

        let (status, body) = post_json(store.clone(), request_body.clone()).await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": "ok",
                "info": {
                    "message": "Your account successfully created.",
                    "responseObject": request_body
                }
            })
        );
        assert!(store.find_by_username("test.account").await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_empty_object_body() {
        let (status, body) = post_json(Arc::new(InMemoryAccountStore::new()), json!({})).await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": "error", "code": 400, "info": { "message": "Request body is empty." } })
        );
    }

    #[actix_web::test]
    async fn test_missing_body() {
        let app = test::init_service(
            App::new()
                .app_data(service_with(Arc::new(InMemoryAccountStore::new())))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/authentication/sign-up")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], "error");
        assert_eq!(body["code"], 400);
        assert_eq!(body["info"]["message"], "Request body is empty.");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(service_with(Arc::new(InMemoryAccountStore::new())))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/authentication/sign-up")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"fullName\": ")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({ "success": "error", "code": 400, "info": { "message": "A bad request was made. Try again." } })
        );
    }

    #[actix_web::test]
    async fn test_non_object_json_is_bad_request() {
        let (_, body) = post_json(Arc::new(InMemoryAccountStore::new()), json!(["a", "b"])).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["info"]["message"], "A bad request was made. Try again.");
    }

    #[actix_web::test]
    async fn test_missing_required_fields() {
        let (_, body) = post_json(
            Arc::new(InMemoryAccountStore::new()),
            json!({ "fullName": "", "emailAddress": "", "username": "", "password": "" }),
        )
        .await;

        assert_eq!(
            body,
            json!({
                "success": "error",
                "code": 400,
                "info": {
                    "message": "Full Name is required.",
                    "errors": [
                        "Full Name is required.",
                        "Email Address is required.",
                        "Username is required.",
                        "Password is required."
                    ]
                }
            })
        );
    }

    #[actix_web::test]
    async fn test_invalid_types() {
        let (_, body) = post_json(
            Arc::new(InMemoryAccountStore::new()),
            json!({ "fullName": 1, "emailAddress": 2, "username": 3, "password": 4 }),
        )
        .await;

        assert_eq!(
            body["info"],
            json!({
                "message": "Invalid type for full name.",
                "errors": [
                    "Invalid type for full name.",
                    "Invalid type for email address.",
                    "Invalid type for username.",
                    "Invalid type for password."
                ]
            })
        );
    }

    #[actix_web::test]
    async fn test_username_too_short_or_long() {
        for username in ["2char", "somerandomusernamethatisdefinitelylongerthan50characters"] {
            let (_, body) = post_json(
                Arc::new(InMemoryAccountStore::new()),
                json!({
                    "fullName": "Test User",
                    "emailAddress": "testuser@gmail.com",
                    "username": username,
                    "password": "longerthan50charpassword"
                }),
            )
            .await;

            assert_eq!(body["code"], 400);
            assert_eq!(
                body["info"],
                json!({
                    "message": "Username must be longer than 6 and less than 50 characters.",
                    "errors": ["Username must be longer than 6 and less than 50 characters."]
                })
            );
        }
    }

    #[actix_web::test]
    async fn test_username_already_exists() {
        let store = Arc::new(InMemoryAccountStore::with_records([AccountRecord::new(
            "Test Account".to_string(),
            "test.account@gmail.com".to_string(),
            "test.account".to_string(),
            "hash".to_string(),
            None,
        )]));

        let (_, body) = post_json(
            store.clone(),
            json!({
                "fullName": "Test User",
                "emailAddress": "testuser@gmail.com",
                "username": "test.account",
                "password": "longerthan50charpassword"
            }),
        )
        .await;

        assert_eq!(body["success"], "error");
        assert_eq!(body["code"], 400);
        assert_eq!(
            body["info"],
            json!({ "message": "Username already exists.", "errors": ["Username already exists."] })
        );
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_parse_body_whitespace_and_null_are_missing() {
        let response = parse_body(b"  \n ").unwrap_err();
        assert_eq!(response.info().message, "Request body is empty.");

        let response = parse_body(b"null").unwrap_err();
        assert_eq!(response.info().message, "Request body is empty.");
    }
}
