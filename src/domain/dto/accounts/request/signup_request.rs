//! # 가입 요청 DTO
//!
//! `POST /api/authentication/sign-up` 요청 본문의 필드 이름, 표시 라벨,
//! 그리고 검증을 통과한 본문을 정규화한 [`SignupRequest`]를 정의합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "fullName": "Test Account",
//!   "emailAddress": "test.account@gmail.com",
//!   "username": "test.account",
//!   "password": "test.account.password",
//!   "professionalArea": "Civil Engineering"
//! }
//! ```
//!
//! `professionalArea`만 선택 필드입니다.

use serde_json::{Map, Value};
use crate::domain::entities::AccountRecord;
use crate::errors::AppError;
use crate::utils::validators::FieldLabels;

/// 요청 본문의 JSON 키
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL_ADDRESS: &str = "emailAddress";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const PROFESSIONAL_AREA: &str = "professionalArea";
}

/// 필수 필드 (검증 순서)
pub const REQUIRED_FIELDS: [&str; 4] = [
    fields::FULL_NAME,
    fields::EMAIL_ADDRESS,
    fields::USERNAME,
    fields::PASSWORD,
];

/// 문자열 타입이어야 하는 필드 (검증 순서)
pub const STRING_FIELDS: [&str; 5] = [
    fields::FULL_NAME,
    fields::PROFESSIONAL_AREA,
    fields::EMAIL_ADDRESS,
    fields::USERNAME,
    fields::PASSWORD,
];

/// 에러 메시지에 쓰이는 필드 라벨
pub const SIGNUP_FIELD_LABELS: FieldLabels = FieldLabels::new(&[
    (fields::FULL_NAME, "Full Name"),
    (fields::PROFESSIONAL_AREA, "Professional Area"),
    (fields::EMAIL_ADDRESS, "Email Address"),
    (fields::USERNAME, "Username"),
    (fields::PASSWORD, "Password"),
]);

/// 검증을 통과한 가입 요청
///
/// 문자열 필드는 trim 되고, 이메일과 사용자명은 소문자로 변환됩니다.
/// 비밀번호는 입력 그대로 유지되어 해싱됩니다.
#[derive(Clone)]
pub struct SignupRequest {
    pub full_name: String,
    pub email_address: String,
    pub username: String,
    pub password: String,
    pub professional_area: Option<String>,
}

impl SignupRequest {
    /// 요청 본문에서 정규화된 가입 요청을 만듭니다.
    ///
    /// 필수 필드가 문자열이 아니면 `InternalError`를 반환합니다.
    /// (검증 단계는 truthy 값만 타입 검사하므로 `0`, `false` 같은 값이 여기까지 올 수 있습니다.)
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        let professional_area = body
            .get(fields::PROFESSIONAL_AREA)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|area| !area.is_empty())
            .map(str::to_string);

        Ok(Self {
            full_name: required_str(body, fields::FULL_NAME)?.trim().to_string(),
            email_address: normalize_identifier(required_str(body, fields::EMAIL_ADDRESS)?),
            username: normalize_identifier(required_str(body, fields::USERNAME)?),
            password: required_str(body, fields::PASSWORD)?.to_string(),
            professional_area,
        })
    }

    /// 해시된 비밀번호로 저장용 레코드를 만듭니다.
    pub fn into_record(self, password_hash: String) -> AccountRecord {
        AccountRecord::new(
            self.full_name,
            self.email_address,
            self.username,
            password_hash,
            self.professional_area,
        )
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("full_name", &self.full_name)
            .field("email_address", &self.email_address)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("professional_area", &self.professional_area)
            .finish()
    }
}

/// 이메일, 사용자명처럼 대소문자를 구분하지 않는 식별자를 정규화합니다.
pub fn normalize_identifier(value: &str) -> String {
    value.trim().to_lowercase()
}

fn required_str<'a>(body: &'a Map<String, Value>, field: &str) -> Result<&'a str, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InternalError(format!("{} is not a string", field)))
}
