//! 비즈니스 로직 서비스 모듈
//!
//! 서비스는 저장소 핸들을 생성자에서 주입받습니다.
//!
//! ```rust,ignore
//! let service = SignupService::from_env(store.clone());
//! let envelope = service.signup(&body).await;
//! ```

pub mod accounts;
