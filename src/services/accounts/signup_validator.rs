//! # 가입 도메인 검증기
//!
//! 범용 필드 검증기와 계정 고유 규칙을 조합하여 가입 요청의 에러 목록을 만듭니다.
//!
//! ## 검증 순서
//!
//! 1. 필수 필드: fullName, emailAddress, username, password
//! 2. 문자열 타입: fullName, professionalArea, emailAddress, username, password
//! 3. 사용자명: 길이 6-50, 저장소 중복 조회 (둘 다 항상 실행)
//! 4. 비밀번호: 최소 6자 (배열이면 원소 6개)
//!
//! 각 단계의 결과는 누적되며, 저장소 장애만 `Err`로 전파됩니다.

use serde_json::{Map, Value};
use validator::ValidateLength;
use crate::domain::dto::accounts::request::signup_request::{
    fields, normalize_identifier, REQUIRED_FIELDS, SIGNUP_FIELD_LABELS, STRING_FIELDS,
};
use crate::errors::AppError;
use crate::repositories::accounts::AccountStore;
use crate::utils::validators::{validate_required, validate_type, JsonType};

pub const USERNAME_MIN_LENGTH: u64 = 6;
pub const USERNAME_MAX_LENGTH: u64 = 50;
pub const PASSWORD_MIN_LENGTH: u64 = 6;

pub const USERNAME_LENGTH_MESSAGE: &str = "Username must be longer than 6 and less than 50 characters.";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists.";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be longer than 6 characters.";

/// 가입 요청 본문을 검증합니다.
///
/// # 반환값
///
/// * `Ok(errors)` - 에러 메시지 목록 (비어 있으면 유효)
/// * `Err(AppError)` - 사용자명 중복 조회 중 저장소 오류
pub async fn validate_signup(
    body: &Map<String, Value>,
    store: &dyn AccountStore,
) -> Result<Vec<String>, AppError> {
    let mut errors = validate_required(body, &REQUIRED_FIELDS, &SIGNUP_FIELD_LABELS);
    errors.extend(validate_type(body, JsonType::String, &STRING_FIELDS, &SIGNUP_FIELD_LABELS));

    if let Some(username) = non_empty_str(body, fields::USERNAME) {
        errors.extend(validate_username(username, store).await?);
    }

    if body.get(fields::PASSWORD).is_some_and(is_short_password) {
        errors.push(PASSWORD_LENGTH_MESSAGE.to_string());
    }

    Ok(errors)
}

/// 사용자명 길이와 중복을 검증합니다.
///
/// 길이 검사가 실패해도 중복 조회는 실행됩니다.
async fn validate_username(username: &str, store: &dyn AccountStore) -> Result<Vec<String>, AppError> {
    let mut errors = Vec::new();

    if !username.validate_length(Some(USERNAME_MIN_LENGTH), Some(USERNAME_MAX_LENGTH), None) {
        errors.push(USERNAME_LENGTH_MESSAGE.to_string());
    }

    if store.username_exists(&normalize_identifier(username)).await? {
        errors.push(USERNAME_TAKEN_MESSAGE.to_string());
    }

    Ok(errors)
}

/// 길이를 가진 참 값(비어 있지 않은 문자열, 배열)이 최소 길이보다 짧은지 검사합니다.
///
/// 배열은 타입 에러와 함께 길이 에러도 받습니다.
fn is_short_password(value: &Value) -> bool {
    match value {
        Value::String(password) if !password.is_empty() => {
            !password.validate_length(Some(PASSWORD_MIN_LENGTH), None, None)
        }
        Value::Array(items) => !items.validate_length(Some(PASSWORD_MIN_LENGTH), None, None),
        _ => false,
    }
}

fn non_empty_str<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use crate::domain::entities::AccountRecord;
    use crate::repositories::accounts::InMemoryAccountStore;

    struct FailingStore;

    #[async_trait]
    impl AccountStore for FailingStore {
        async fn find_by_username(&self, _username: &str) -> Result<Option<AccountRecord>, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn insert(&self, _record: AccountRecord) -> Result<(), AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn valid_body(username: &str) -> Map<String, Value> {
        body(json!({
            "fullName": "Test User",
            "emailAddress": "testuser@gmail.com",
            "username": username,
            "password": "longenoughpassword"
        }))
    }

    fn existing(username: &str) -> InMemoryAccountStore {
        InMemoryAccountStore::with_records([AccountRecord::new(
            "Test Account".to_string(),
            "test.account@gmail.com".to_string(),
            username.to_string(),
            "hash".to_string(),
            None,
        )])
    }

    #[actix_web::test]
    async fn test_valid_body_has_no_errors() {
        let store = InMemoryAccountStore::new();
        let errors = validate_signup(&valid_body("test.account"), &store).await.unwrap();
        assert!(errors.is_empty());
    }

    #[actix_web::test]
    async fn test_all_empty_fields_report_required_in_order() {
        let store = InMemoryAccountStore::new();
        let errors = validate_signup(
            &body(json!({ "fullName": "", "emailAddress": "", "username": "", "password": "" })),
            &store,
        )
        .await
        .unwrap();

        assert_eq!(
            errors,
            vec![
                "Full Name is required.",
                "Email Address is required.",
                "Username is required.",
                "Password is required.",
            ]
        );
    }

    #[actix_web::test]
    async fn test_numeric_fields_report_type_errors() {
        let store = InMemoryAccountStore::new();
        let errors = validate_signup(
            &body(json!({ "fullName": 1, "emailAddress": 2, "username": 3, "password": 4 })),
            &store,
        )
        .await
        .unwrap();

        assert_eq!(
            errors,
            vec![
                "Invalid type for full name.",
                "Invalid type for email address.",
                "Invalid type for username.",
                "Invalid type for password.",
            ]
        );
    }

    #[actix_web::test]
    async fn test_professional_area_type_error() {
        let store = InMemoryAccountStore::new();
        let mut request = valid_body("test.account");
        request.insert("professionalArea".to_string(), json!(["engineering"]));

        let errors = validate_signup(&request, &store).await.unwrap();
        assert_eq!(errors, vec!["Invalid type for professional area."]);
    }

    #[actix_web::test]
    async fn test_username_length_bounds() {
        let store = InMemoryAccountStore::new();

        for length in [1usize, 5, 51, 60] {
            let errors = validate_signup(&valid_body(&"u".repeat(length)), &store).await.unwrap();
            assert_eq!(errors, vec![USERNAME_LENGTH_MESSAGE], "length {}", length);
        }

        for length in [6usize, 7, 49, 50] {
            let errors = validate_signup(&valid_body(&"u".repeat(length)), &store).await.unwrap();
            assert!(errors.is_empty(), "length {}", length);
        }
    }

    #[actix_web::test]
    async fn test_short_username() {
        let store = InMemoryAccountStore::new();
        let errors = validate_signup(&valid_body("2char"), &store).await.unwrap();
        assert_eq!(errors, vec![USERNAME_LENGTH_MESSAGE]);
    }

    #[actix_web::test]
    async fn test_duplicate_username() {
        let store = existing("test.account");
        let errors = validate_signup(&valid_body("test.account"), &store).await.unwrap();
        assert_eq!(errors, vec![USERNAME_TAKEN_MESSAGE]);
    }

    #[actix_web::test]
    async fn test_duplicate_lookup_is_trimmed_and_case_insensitive() {
        let store = existing("test.account");
        let errors = validate_signup(&valid_body("  Test.Account "), &store).await.unwrap();
        assert_eq!(errors, vec![USERNAME_TAKEN_MESSAGE]);
    }

    #[actix_web::test]
    async fn test_length_and_duplicate_both_reported() {
        let store = existing("short");
        let errors = validate_signup(&valid_body("short"), &store).await.unwrap();
        assert_eq!(errors, vec![USERNAME_LENGTH_MESSAGE, USERNAME_TAKEN_MESSAGE]);
    }

    #[actix_web::test]
    async fn test_short_password() {
        let store = InMemoryAccountStore::new();
        let mut request = valid_body("test.account");
        request.insert("password".to_string(), json!("12345"));

        let errors = validate_signup(&request, &store).await.unwrap();
        assert_eq!(errors, vec![PASSWORD_LENGTH_MESSAGE]);
    }

    #[actix_web::test]
    async fn test_missing_field_and_semantic_errors_accumulate() {
        let store = InMemoryAccountStore::new();
        let errors = validate_signup(
            &body(json!({ "username": "abc", "password": "123" })),
            &store,
        )
        .await
        .unwrap();

        assert_eq!(
            errors,
            vec![
                "Full Name is required.",
                "Email Address is required.",
                USERNAME_LENGTH_MESSAGE,
                PASSWORD_LENGTH_MESSAGE,
            ]
        );
    }

    #[actix_web::test]
    async fn test_store_failure_propagates() {
        let result = validate_signup(&valid_body("test.account"), &FailingStore).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_store_not_consulted_without_username() {
        let errors = validate_signup(
            &body(json!({ "fullName": "A", "emailAddress": "a@b.c", "password": "abcdefg" })),
            &FailingStore,
        )
        .await
        .unwrap();

        assert_eq!(errors, vec!["Username is required."]);
    }

    #[actix_web::test]
    async fn test_short_array_password_gets_type_and_length_errors() {
        let store = InMemoryAccountStore::new();
        let mut request = valid_body("test.account");
        request.insert("password".to_string(), json!(["a"]));

        let errors = validate_signup(&request, &store).await.unwrap();
        assert_eq!(errors, vec!["Invalid type for password.", PASSWORD_LENGTH_MESSAGE]);
    }

    #[actix_web::test]
    async fn test_non_length_password_values_skip_length_rule() {
        let store = InMemoryAccountStore::new();

        for password in [json!(12345), json!({ "a": 1 }), json!(["a", "b", "c", "d", "e", "f"])] {
            let mut request = valid_body("test.account");
            request.insert("password".to_string(), password);

            let errors = validate_signup(&request, &store).await.unwrap();
            assert_eq!(errors, vec!["Invalid type for password."]);
        }
    }

    /// 전체 레코드를 읽을 수 없어도 사용자명만 확인되면 중복으로 판정되는 저장소
    struct UsernameOnlyStore;

    #[async_trait]
    impl AccountStore for UsernameOnlyStore {
        async fn find_by_username(&self, _username: &str) -> Result<Option<AccountRecord>, AppError> {
            Err(AppError::DatabaseError("missing field `PASSWORD`".to_string()))
        }

        async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
            Ok(username == "test.account")
        }

        async fn insert(&self, _record: AccountRecord) -> Result<(), AppError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_uniqueness_uses_username_lookup_only() {
        let errors = validate_signup(&valid_body("Test.Account"), &UsernameOnlyStore).await.unwrap();
        assert_eq!(errors, vec![USERNAME_TAKEN_MESSAGE]);

        let errors = validate_signup(&valid_body("new.account"), &UsernameOnlyStore).await.unwrap();
        assert!(errors.is_empty());
    }
}
