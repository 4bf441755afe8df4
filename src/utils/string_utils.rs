//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 첫 글자만 대문자로 바꿉니다.
///
/// 나머지 글자는 그대로 유지됩니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(capitalize_first("your account"), "Your account");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 공백만 있는 문자열인지 확인
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
