//! # 퀴즈 플레이 라우트 핸들러
//!
//! `POST /quizzes` — 아직 출제되지 않은 질문 하나를 골라 반환합니다.
//!
//! 이 엔드포인트는 호출 간 상태를 저장하지 않습니다. 클라이언트가
//! 이미 본 질문 id들을 `previous_questions`로 누적해서 보내는 책임을 집니다.

use crate::{db, error::AppError, models::QuizRequest, routes::questions::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `POST /quizzes` — 다음 퀴즈 질문을 출제합니다.
///
/// ## 처리 흐름
/// 1. `previous_questions`와 `quiz_category`가 모두 있는지 검증 — 없으면 404
/// 2. 출제 이력에 없는 질문들로 후보 집합을 구성
/// 3. `quiz_category.id != 0`이면 해당 카테고리로 후보를 제한
/// 4. 저장 순서상 첫 번째 후보를 선택 — 같은 입력이면 항상 같은 질문
///    (이름과 달리 무작위 추첨이 아닌 결정적 선택, 기존 동작 보존)
/// 5. 후보가 없으면 404
pub async fn draw_quiz(
    State(state): State<AppState>,
    Json(req): Json<QuizRequest>,
) -> Result<Json<Value>, AppError> {
    let previous = req.previous_questions.ok_or(AppError::NotFound)?;
    let quiz_category = req.quiz_category.ok_or(AppError::NotFound)?;

    let question = db::quiz_question(&state.pool, &previous, quiz_category.id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
