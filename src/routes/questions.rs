//! # 질문(Question) 라우트 핸들러
//!
//! 질문 목록 조회, 생성, 삭제, 검색을 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /questions?page=N`  → 질문 목록 조회 (10건 단위 페이지네이션)
//! - `POST   /questions`         → 새 질문 생성
//! - `DELETE /questions/{id}`    → 질문 삭제
//! - `POST   /questions/search`  → 질문 본문 검색
//!
//! ## Axum 핸들러 패턴
//! Axum 핸들러는 **Extractor(추출기)**를 매개변수로 받습니다:
//! - `State(state)`: 앱 전역 상태 (DB 풀)
//! - `Path(id)`: URL 경로 파라미터
//! - `Query(query)`: `?page=N` 쿼리 파라미터
//! - `Json(req)`: 요청 본문을 JSON으로 파싱하여 구조체로 변환
//!
//! 반환 타입이 `Result<T, AppError>`이면, Axum이 자동으로:
//! - `Ok(T)` → T를 HTTP 응답으로 변환 (IntoResponse 트레이트 사용)
//! - `Err(AppError)` → `{success, error, message}` 에러 JSON 응답으로 변환

use crate::{
    db,
    error::AppError,
    models::*,
    services::pagination::paginate,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 의존성 주입(Dependency Injection) 메커니즘입니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 실제 풀이 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
}

/// `GET /questions?page=N` — 질문 목록을 페이지 단위로 조회합니다.
///
/// 전체 질문을 id순으로 가져와 요청한 페이지(기본 1페이지)만 잘라내고,
/// 카테고리 조회 테이블을 함께 반환합니다. 잘라낸 페이지가 비어 있으면
/// (범위를 벗어난 페이지 포함) 404를 반환합니다.
///
/// 기존 클라이언트와의 호환을 위해 보존한 응답 특성:
/// - `total_questions`는 전체 건수가 아니라 **반환된 페이지의 건수**입니다
/// - `current_category`는 단일 카테고리가 아니라 `categories`와 동일한
///   전체 조회 테이블입니다
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let questions = db::list_questions(&state.pool).await?;
    let page = paginate(query.page, &questions);

    let categories = db::list_categories(&state.pool).await?;
    let lookup = category_map(&categories);

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    // 보존 동작: total_questions는 전체 건수가 아니라 이 페이지의 건수
    let total = page.len();

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": total,
        "categories": lookup.clone(),
        "current_category": lookup,
    })))
}

/// `POST /questions` — 새 질문을 생성합니다.
///
/// 필수 필드(question, answer, difficulty, category) 중 하나라도 빠지면
/// 422를 반환합니다. 중복 검사는 하지 않으며, 동일한 본문을 반복 제출하면
/// 매번 새 레코드가 생성됩니다.
///
/// 생성된 질문의 id는 응답에 포함하지 않습니다 (기존 API와 동일).
pub async fn create_question(
    State(state): State<AppState>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Json<Value>, AppError> {
    // let-else: 네 필드가 모두 존재할 때만 비즈니스 로직으로 진행합니다.
    // 하나라도 None이면 else 분기에서 422로 끝납니다.
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (req.question, req.answer, req.difficulty, req.category)
    else {
        return Err(AppError::Unprocessable);
    };

    // 저장 실패(제약 위반 등)는 sqlx::Error로 전파되는데,
    // 이 엔드포인트에서는 422로 매핑해야 하므로 map_err로 변환합니다.
    db::create_question(&state.pool, &question, &answer, category, difficulty)
        .await
        .map_err(|_| AppError::Unprocessable)?;

    Ok(Json(json!({
        "success": true,
        "message": "Question created",
    })))
}

/// `DELETE /questions/{id}` — 질문을 영구 삭제합니다.
///
/// 존재하지 않는 id를 삭제하려 하면 422를 반환합니다
/// (의미상 404가 더 자연스럽지만 기존 동작을 보존).
/// 삭제는 조건부 DELETE 한 문장으로 수행되므로 동시 요청 간 경합이 없습니다.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::delete_question(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Unprocessable);
    }

    Ok(Json(json!({
        "success": true,
        "message": "Question deleted",
        "id": id,
    })))
}

/// `POST /questions/search` — 질문 본문에 대한 대소문자 무시 부분 일치 검색.
///
/// 매칭된 질문 전체를 가져온 뒤 같은 요청의 `?page=N` 파라미터로
/// 페이지네이션합니다 (페이지 파라미터가 없으면 1페이지).
///
/// - `searchTerm` 필드 자체가 없으면 422 (빈 문자열은 유효 — 전체 매칭)
/// - 매칭 결과가 0건이면 422 (기존 동작 보존)
/// - `total_questions`는 여기서는 페이지 크기가 아니라 **전체 매칭 건수**입니다
pub async fn search_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<Value>, AppError> {
    let term = req.search_term.ok_or(AppError::Unprocessable)?;

    let matches = db::search_questions(&state.pool, &term).await?;
    if matches.is_empty() {
        return Err(AppError::Unprocessable);
    }

    // 검색에서는 total_questions가 페이지 크기가 아니라 전체 매칭 건수입니다
    let total = matches.len();
    let page = paginate(query.page, &matches);

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": total,
        "current_category": null,
    })))
}
