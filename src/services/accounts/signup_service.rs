//! # 가입 서비스
//!
//! 가입 요청의 전체 흐름을 조율합니다.
//!
//! ```text
//! 본문 ──▶ validate_signup ──(에러 있음)──▶ validation_failed (400)
//!                │
//!                ▼ (유효)
//!          정규화 → bcrypt 해싱 → 저장소 삽입 ──▶ create_successful
//!                                   │
//!                                   ├─ 중복 키 ──▶ validation_failed ["Username already exists."]
//!                                   └─ 기타 에러 ─▶ server_error (502)
//! ```
//!
//! 성공 응답의 `responseObject`는 정규화된 레코드가 아니라 클라이언트가 보낸
//! 원본 본문입니다.

use std::sync::Arc;
use std::time::Instant;
use bcrypt::hash;
use log::{debug, error, info, warn};
use serde_json::{Map, Value};
use crate::config::PasswordConfig;
use crate::domain::dto::accounts::request::SignupRequest;
use crate::domain::dto::response::envelope::{self, EntityKind, ResponseEnvelope};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::accounts::AccountStore;
use super::signup_validator::{validate_signup, USERNAME_TAKEN_MESSAGE};

/// 가입 실패 시 서버 에러 메시지 접두어
pub const SIGNUP_FAILED_MESSAGE: &str = "There is an error while signing up.";

/// 가입 서비스
///
/// 요청 간 상태를 가지지 않으며, 저장소 핸들과 bcrypt cost만 보관합니다.
#[derive(Clone)]
pub struct SignupService {
    store: Arc<dyn AccountStore>,
    bcrypt_cost: u32,
}

impl SignupService {
    pub fn new(store: Arc<dyn AccountStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// 환경 설정의 bcrypt cost로 서비스를 만듭니다.
    pub fn from_env(store: Arc<dyn AccountStore>) -> Self {
        Self::new(store, PasswordConfig::bcrypt_cost())
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    /// 가입을 처리하고 항상 응답 봉투를 반환합니다.
    ///
    /// 예기치 못한 에러는 여기서 한 번만 잡혀 서버 에러 봉투로 변환됩니다.
    pub async fn signup(&self, body: &Map<String, Value>) -> ResponseEnvelope {
        match self.try_signup(body).await {
            Ok(response) => response,
            Err(AppError::ConflictError(reason)) => {
                warn!("가입 중 사용자명 충돌: {}", reason);
                envelope::validation_failed(vec![USERNAME_TAKEN_MESSAGE.to_string()])
            }
            Err(e) => {
                error!("ERROR: There is an error while signing up: {}", e);
                envelope::server_error(Some(&format!("{}{}", SIGNUP_FAILED_MESSAGE, e)))
            }
        }
    }

    async fn try_signup(&self, body: &Map<String, Value>) -> AppResult<ResponseEnvelope> {
        let start_time = Instant::now();

        let errors = validate_signup(body, self.store.as_ref()).await?;
        if !errors.is_empty() {
            debug!("가입 요청 검증 실패: {:?}", errors);
            return Ok(envelope::validation_failed(errors));
        }

        let request = SignupRequest::from_body(body)?;

        let hash_start = Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", self.bcrypt_cost))?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let username = request.username.clone();
        self.store.insert(request.into_record(password_hash)).await?;

        info!("계정 생성 완료: {} ({:?})", username, start_time.elapsed());

        Ok(envelope::create_successful(
            Some(Value::Object(body.clone())),
            Some(EntityKind::Account),
        ))
    }
}
