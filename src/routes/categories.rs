//! # 카테고리 라우트 핸들러
//!
//! 카테고리 목록과 카테고리별 질문 목록을 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET /categories`                    → 전체 카테고리 조회 테이블
//! - `GET /categories/{id}/questions?page=N` → 해당 카테고리의 질문 목록

use crate::{
    db,
    error::AppError,
    models::*,
    routes::questions::AppState,
    services::pagination::paginate,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

/// `GET /categories` — 전체 카테고리를 조회 테이블 형태로 반환합니다.
///
/// 응답은 `{"<id>": "<type>"}` 매핑입니다 (순서는 의미 없음).
/// 카테고리가 하나도 없으면 404를 반환합니다.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let categories = db::list_categories(&state.pool).await?;
    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// `GET /categories/{id}/questions?page=N` — 카테고리별 질문 목록을 조회합니다.
///
/// 해당 카테고리의 질문을 id순으로 가져와 페이지네이션합니다.
/// 잘라낸 페이지가 비어 있으면 (없는 카테고리 포함) 404를 반환합니다.
///
/// `total_questions`는 전체 필터링 건수가 아니라 반환된 페이지의 건수입니다
/// (질문 목록 엔드포인트와 같은 보존 동작).
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let questions = db::questions_by_category(&state.pool, id).await?;
    let page = paginate(query.page, &questions);

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    // 보존 동작: total_questions는 필터링된 전체 건수가 아니라 이 페이지의 건수
    let total = page.len();

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "current_category": id,
        "total_questions": total,
    })))
}
