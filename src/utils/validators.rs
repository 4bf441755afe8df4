//! # 필드 검증기
//!
//! JSON 요청 본문에 대한 범용 필드 검증 함수입니다.
//! 검증 결과는 사람이 읽을 수 있는 에러 메시지 목록이며, 순서가 의미를 가집니다.
//!
//! - [`validate_required`]: 필수 필드 누락 → `"<Label> is required."`
//! - [`validate_type`]: 타입 불일치 → `"Invalid type for <label>."`
//!
//! ```rust,ignore
//! let mut errors = validate_required(&body, &REQUIRED_FIELDS, &LABELS);
//! errors.extend(validate_type(&body, JsonType::String, &STRING_FIELDS, &LABELS));
//! ```

use serde_json::{Map, Value};
use crate::utils::string_utils::is_blank;

/// 필드 이름 → 표시 라벨 테이블
///
/// 테이블에 없는 필드는 원래 이름을 라벨로 사용합니다.
#[derive(Debug, Clone, Copy)]
pub struct FieldLabels {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldLabels {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn label<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, label)| *label)
            .unwrap_or(field)
    }
}

/// 검증에 사용하는 JSON 값의 타입
///
/// 배열과 null은 `Object`로 분류됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    Number,
    Boolean,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsonType::String,
            Value::Number(_) => JsonType::Number,
            Value::Bool(_) => JsonType::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => JsonType::Object,
        }
    }
}

/// 값이 "참"으로 취급되는지 여부
///
/// `null`, `false`, `0`, 빈 문자열은 거짓입니다.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 필수 필드 존재 여부를 검증합니다.
///
/// 키가 없거나, 값이 `null`이거나, 공백뿐인 문자열이면 누락으로 봅니다.
/// 에러 순서는 `required_fields`의 순서를 따릅니다.
pub fn validate_required(
    body: &Map<String, Value>,
    required_fields: &[&str],
    labels: &FieldLabels,
) -> Vec<String> {
    required_fields
        .iter()
        .filter(|field| match body.get(**field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => is_blank(s),
            Some(_) => false,
        })
        .map(|field| format!("{} is required.", labels.label(field)))
        .collect()
}

/// 필드 타입을 검증합니다.
///
/// 존재하고 참인 값만 검사하며, 타입이 `expected`와 다르면
/// 소문자 라벨로 에러를 만듭니다.
pub fn validate_type(
    body: &Map<String, Value>,
    expected: JsonType,
    fields: &[&str],
    labels: &FieldLabels,
) -> Vec<String> {
    fields
        .iter()
        .filter(|field| {
            body.get(**field)
                .is_some_and(|value| is_truthy(value) && JsonType::of(value) != expected)
        })
        .map(|field| format!("Invalid type for {}.", labels.label(field).to_lowercase()))
        .collect()
}
