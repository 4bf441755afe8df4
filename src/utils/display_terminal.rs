//! 시작 로그 포맷팅 유틸리티
//!
//! 서버 초기화 과정에서 출력되는 박스 제목과 단계 표시를 만듭니다.
//! 출력은 모두 `log` 파사드를 통해 이루어집니다.

use log::info;

/// 고정 너비 박스 내부 칸 수
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Account Service                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝", width = BOX_WIDTH)
}

/// 박스 제목을 로그로 출력합니다
pub fn log_boxed_title(title: &str) {
    for line in format_boxed_title(title).lines() {
        info!("{}", line);
    }
}

/// 초기화 단계 완료를 로그로 출력합니다
///
/// ```text
/// ✓ Step 1: Account store ready (memory)
/// ```
pub fn log_step_complete(step: u8, description: &str, detail: &str) {
    info!("✓ Step {}: {} ({})", step, description, detail);
}
