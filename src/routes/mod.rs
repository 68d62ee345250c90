//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `categories`: 카테고리 목록, 카테고리별 질문 목록 핸들러
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `questions`: 질문 목록/생성/삭제/검색 핸들러와 AppState
//! - `quizzes`: 퀴즈 질문 출제 핸들러

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

// 각 모듈의 핸들러 함수들을 재공개하여
// `routes::list_questions`처럼 바로 접근 가능하게 합니다.
pub use categories::*;
pub use health::*;
pub use questions::*;
pub use quizzes::*;

use crate::error::AppError;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// 등록되지 않은 경로에 대한 폴백 — 404 JSON 응답을 반환합니다.
async fn not_found_fallback() -> AppError {
    AppError::NotFound
}

/// 경로는 존재하지만 메서드가 다른 경우의 폴백 — 405 JSON 응답을 반환합니다.
async fn method_not_allowed_fallback() -> AppError {
    AppError::MethodNotAllowed
}

/// API 라우터를 구성합니다.
///
/// main.rs와 통합 테스트가 같은 라우터를 공유하기 위해 별도 함수로
/// 분리했습니다. CORS/트레이싱 같은 전역 미들웨어는 main.rs에서 얹습니다.
///
/// `.route()`: URL 패턴과 핸들러 함수를 연결합니다.
/// `.post()`를 체이닝하면 같은 경로에 여러 HTTP 메서드를 매핑할 수 있습니다.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        // {id}는 URL 경로 파라미터 (Path<i64>로 핸들러에서 추출)
        .route("/categories/{id}/questions", get(questions_by_category))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .route("/quizzes", post(draw_quiz))
        .route("/health", get(health_check))
        // 에러 응답도 {success, error, message} JSON 형태를 유지하도록
        // 라우터 수준의 폴백을 등록합니다.
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        // .with_state(): 이 라우터의 모든 핸들러에서 AppState를 사용할 수 있게 합니다.
        .with_state(state)
}
