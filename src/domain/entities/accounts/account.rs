//! Account Entity Implementation
//!
//! 가입 시 한 번 생성되는 계정 레코드입니다.
//! 저장소 컬럼 이름은 `FULL_NAME`, `EMAIL_ADDRESS`, `USERNAME`,
//! `PASSWORD`, `PROF_AREA` 형태의 대문자 스네이크 케이스를 사용합니다.

use serde::{Deserialize, Serialize};

/// 저장소 컬럼 이름
pub mod columns {
    pub const FULL_NAME: &str = "FULL_NAME";
    pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
    pub const USERNAME: &str = "USERNAME";
    pub const PASSWORD: &str = "PASSWORD";
    pub const PROF_AREA: &str = "PROF_AREA";
}

/// 계정 엔티티
///
/// `USERNAME`이 유일 키입니다. 이 서비스는 레코드를 생성만 하며
/// 수정하거나 삭제하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// 전체 이름 (trim 적용)
    #[serde(rename = "FULL_NAME")]
    pub full_name: String,
    /// 이메일 주소 (trim + 소문자)
    #[serde(rename = "EMAIL_ADDRESS")]
    pub email_address: String,
    /// 사용자명 (trim + 소문자, unique)
    #[serde(rename = "USERNAME")]
    pub username: String,
    /// bcrypt 해시된 비밀번호
    #[serde(rename = "PASSWORD")]
    pub password_hash: String,
    /// 전문 분야 (선택)
    #[serde(rename = "PROF_AREA", default, skip_serializing_if = "Option::is_none")]
    pub professional_area: Option<String>,
}

impl AccountRecord {
    /// 정규화된 가입 정보와 해시된 비밀번호로 레코드를 만듭니다.
    pub fn new(
        full_name: String,
        email_address: String,
        username: String,
        password_hash: String,
        professional_area: Option<String>,
    ) -> Self {
        Self {
            full_name,
            email_address,
            username,
            password_hash,
            professional_area,
        }
    }
}
