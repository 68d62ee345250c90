//! # 퀴즈 플레이 요청 모델
//!
//! `POST /quizzes` 엔드포인트의 요청 본문 구조체들입니다.
//! 이 엔드포인트는 상태를 저장하지 않으며(stateless), 클라이언트가
//! 이미 본 질문들의 ID 목록(`previous_questions`)을 누적하여 보냅니다.

use serde::Deserialize;

/// 퀴즈 질문 요청 — `POST /quizzes`의 요청 본문에 해당합니다.
///
/// 두 필드 모두 Option인 이유: 어느 하나라도 누락되면 핸들러에서
/// 404(NotFound)로 매핑해야 하므로, 역직렬화 단계에서 실패시키지 않고
/// 핸들러가 직접 존재 여부를 검증합니다.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// 이미 출제된 질문 ID 목록 — 후보 집합에서 제외됩니다
    pub previous_questions: Option<Vec<i64>>,
    /// 출제 범위 카테고리 (id == 0이면 전체 카테고리)
    pub quiz_category: Option<QuizCategory>,
}

/// 퀴즈 카테고리 선택 — 최소한 `id` 필드를 포함하는 객체입니다.
///
/// 프론트엔드는 `{id, type}` 형태로 보내지만 선택 로직에는 id만 필요하므로
/// 나머지 필드는 무시합니다 (serde는 알 수 없는 필드를 기본적으로 무시).
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// 카테고리 ID. 0은 "전체 카테고리"를 의미하는 센티널 값입니다.
    pub id: i64,
}
