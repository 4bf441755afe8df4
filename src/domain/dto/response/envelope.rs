//! # 응답 봉투 (Response Envelope)
//!
//! 모든 요청 결과를 고정된 JSON 형태로 감싸는 빌더 함수들입니다.
//! HTTP 전송 상태는 항상 200이며, 논리적 상태는 본문의 `success`와 `code`에 담깁니다.
//!
//! ## 응답 형태
//!
//! ```json
//! {
//!   "success": "error",
//!   "code": 400,
//!   "info": {
//!     "message": "Full Name is required.",
//!     "errors": ["Full Name is required.", "Username is required."]
//!   }
//! }
//! ```
//!
//! `code`는 `success`가 `"error"`일 때만 존재하고,
//! `errors`는 검증 실패 응답에만 존재합니다.
//!
//! | 빌더 | success | code | 메시지 |
//! |------|---------|------|--------|
//! | [`create_successful`] | ok | - | "{Name} successfully created." |
//! | [`get_successful`] | ok | - | "{Name} successfully retrieved." |
//! | [`update_successful`] | ok | - | "{Name} successfully updated." |
//! | [`delete_successful`] | ok | - | "{Name} successfully deleted." |
//! | [`not_found`] | error | 404 | "{Name} not found." 또는 커스텀 메시지 |
//! | [`missing_content`] | error | 400 | "Request body is empty." / "Missing required fields!" |
//! | [`validation_failed`] | error | 400 | 첫 번째 에러 |
//! | [`server_error`] | error | 502 | "Server is in maintenance. Please try again." |
//! | [`bad_request`] | error | 400 | "A bad request was made. Try again." |

use actix_web::{body::BoxBody, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use serde_json::Value;
use crate::utils::string_utils::capitalize_first;

const DEFAULT_ENTITY_NAME: &str = "An entity";
const NO_ERROR_MESSAGE: &str = "There is no error.";
const SERVER_ERROR_MESSAGE: &str = "Server is in maintenance. Please try again.";
const BAD_REQUEST_MESSAGE: &str = "A bad request was made. Try again.";

/// 논리적 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Error,
}

/// 논리적 상태 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    BadRequest,
    NotFound,
    BadGateway,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::BadGateway => 502,
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

/// 메시지에 들어가는 엔티티 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// 가입으로 생성되는 사용자 본인 계정
    Account,
}

impl EntityKind {
    /// 원본 라벨
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Account => "your account",
        }
    }

    /// 메시지에 쓰이는 이름 (trim 후 첫 글자만 대문자)
    pub fn display_name(self) -> String {
        capitalize_first(self.label().trim())
    }
}

/// `missing_content`의 누락 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingContentKind {
    /// 요청 본문 자체가 비어 있음
    RequestBody,
    /// 필수 필드 누락
    RequiredFields,
}

/// 봉투의 `info` 객체
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeInfo {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(rename = "responseObject", skip_serializing_if = "Option::is_none")]
    pub response_object: Option<Value>,
}

/// 모든 요청에 대해 반환되는 응답 봉투
///
/// 생성자를 통해서만 만들 수 있으며, `code`는 `success == Error`일 때만 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    success: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<StatusCode>,
    info: EnvelopeInfo,
}

impl ResponseEnvelope {
    fn ok(message: String, response_object: Option<Value>) -> Self {
        Self {
            success: Outcome::Ok,
            code: None,
            info: EnvelopeInfo {
                message,
                errors: None,
                // null 응답 객체는 없는 것으로 취급
                response_object: response_object.filter(|value| !value.is_null()),
            },
        }
    }

    fn error(code: StatusCode, message: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: Outcome::Error,
            code: Some(code),
            info: EnvelopeInfo {
                message,
                errors,
                response_object: None,
            },
        }
    }

    pub fn success(&self) -> Outcome {
        self.success
    }

    pub fn code(&self) -> Option<u16> {
        self.code.map(StatusCode::as_u16)
    }

    pub fn info(&self) -> &EnvelopeInfo {
        &self.info
    }

    pub fn is_error(&self) -> bool {
        self.success == Outcome::Error
    }

    /// HTTP 응답으로 변환합니다. 전송 상태는 항상 200입니다.
    pub fn build_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

impl Responder for ResponseEnvelope {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.build_response()
    }
}

fn entity_name(kind: Option<EntityKind>) -> String {
    kind.map(EntityKind::display_name)
        .unwrap_or_else(|| DEFAULT_ENTITY_NAME.to_string())
}

/// 생성 성공 응답
pub fn create_successful(response_object: Option<Value>, kind: Option<EntityKind>) -> ResponseEnvelope {
    ResponseEnvelope::ok(
        format!("{} successfully created.", entity_name(kind)),
        response_object,
    )
}

/// 조회 성공 응답
pub fn get_successful(response_object: Option<Value>, kind: Option<EntityKind>) -> ResponseEnvelope {
    ResponseEnvelope::ok(
        format!("{} successfully retrieved.", entity_name(kind)),
        response_object,
    )
}

/// 수정 성공 응답
pub fn update_successful(response_object: Option<Value>, kind: Option<EntityKind>) -> ResponseEnvelope {
    ResponseEnvelope::ok(
        format!("{} successfully updated.", entity_name(kind)),
        response_object,
    )
}

/// 삭제 성공 응답
pub fn delete_successful(kind: Option<EntityKind>) -> ResponseEnvelope {
    ResponseEnvelope::ok(format!("{} successfully deleted.", entity_name(kind)), None)
}

/// 404 응답. 비어 있지 않은 커스텀 메시지가 있으면 그대로 사용합니다.
pub fn not_found(kind: Option<EntityKind>, message: Option<&str>) -> ResponseEnvelope {
    let message = match message.filter(|m| !m.is_empty()) {
        Some(custom) => custom.to_string(),
        None => format!("{} not found.", entity_name(kind)),
    };

    ResponseEnvelope::error(StatusCode::NotFound, message, None)
}

/// 본문 또는 필수 필드 누락 응답
pub fn missing_content(kind: MissingContentKind) -> ResponseEnvelope {
    let message = match kind {
        MissingContentKind::RequestBody => "Request body is empty.",
        MissingContentKind::RequiredFields => "Missing required fields!",
    };

    ResponseEnvelope::error(StatusCode::BadRequest, message.to_string(), None)
}

/// 검증 실패 응답
///
/// 첫 번째 에러가 `message`가 되고 전체 목록이 `errors`에 담깁니다.
/// 목록이 비어 있으면 성공 응답을 반환합니다.
pub fn validation_failed(errors: Vec<String>) -> ResponseEnvelope {
    match errors.first() {
        Some(first) => {
            let message = first.clone();
            ResponseEnvelope::error(StatusCode::BadRequest, message, Some(errors))
        }
        None => ResponseEnvelope::ok(NO_ERROR_MESSAGE.to_string(), None),
    }
}

/// 502 서버 에러 응답
pub fn server_error(message: Option<&str>) -> ResponseEnvelope {
    let message = message.filter(|m| !m.is_empty()).unwrap_or(SERVER_ERROR_MESSAGE);
    ResponseEnvelope::error(StatusCode::BadGateway, message.to_string(), None)
}

/// 400 잘못된 요청 응답
pub fn bad_request(message: Option<&str>) -> ResponseEnvelope {
    let message = message.filter(|m| !m.is_empty()).unwrap_or(BAD_REQUEST_MESSAGE);
    ResponseEnvelope::error(StatusCode::BadRequest, message.to_string(), None)
}
