//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 핸들은 전역 싱글톤이 아니라 `main`에서 한 번 생성된 `Arc<dyn AccountStore>`이며,
//! 이를 보관한 `SignupService`가 `web::Data<SignupService>`로 핸들러에 주입됩니다.

pub mod accounts;
