//! # API 통합 테스트
//!
//! 인메모리 SQLite 풀 위에 실제 라우터를 올리고,
//! `tower::ServiceExt::oneshot`으로 HTTP 요청을 직접 흘려보내 검증합니다.
//! 서버 소켓을 열지 않으므로 빠르고 격리된 테스트가 가능합니다.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt;
use trivia::routes::{self, AppState};

/// 인메모리 SQLite 풀을 만들고 마이그레이션(스키마 + 카테고리 시드)을 적용합니다.
///
/// max_connections(1)이 중요합니다: `sqlite::memory:`는 연결마다 별도의
/// 데이터베이스를 만들기 때문에, 연결이 하나여야 모든 쿼리가 같은 DB를 봅니다.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

/// 질문 n건을 지정한 카테고리로 시드합니다. id는 1부터 순서대로 부여됩니다.
async fn seed_questions(pool: &SqlitePool, n: i64, category: i64) {
    for i in 1..=n {
        sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, 1)",
        )
        .bind(format!("Question {i}"))
        .bind(format!("Answer {i}"))
        .bind(category)
        .execute(pool)
        .await
        .unwrap();
    }
}

/// GET 요청을 보내고 (상태 코드, JSON 본문)을 반환합니다.
async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// 본문 없는 임의 메서드 요청 (DELETE, PATCH 등).
async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// JSON 본문을 담은 POST 요청.
async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// 응답의 questions 배열에서 id 목록을 뽑아냅니다.
fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_categories_returns_lookup_table() {
    let pool = test_pool().await;
    let app = routes::app(AppState { pool });

    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    // 시드된 카테고리가 {"id": "type"} 매핑으로 반환됩니다
    assert_eq!(body["categories"]["1"], json!("Science"));
    assert_eq!(body["categories"]["2"], json!("Art"));
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn list_categories_empty_is_not_found() {
    let pool = test_pool().await;
    sqlx::query("DELETE FROM categories")
        .execute(&pool)
        .await
        .unwrap();
    let app = routes::app(AppState { pool });

    let (status, body) = get(&app, "/categories").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));
    assert_eq!(body["message"], json!("Resource Not Found Error"));
}

#[tokio::test]
async fn list_questions_paginates_in_id_order() {
    let pool = test_pool().await;
    seed_questions(&pool, 12, 1).await;
    let app = routes::app(AppState { pool });

    // 1페이지: id 1~10
    let (status, body) = get(&app, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), (1..=10).collect::<Vec<i64>>());
    assert_eq!(body["total_questions"], json!(10));

    // 2페이지: 남은 id 11~12, total_questions는 페이지 건수(2)입니다
    let (status, body) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), vec![11, 12]);
    assert_eq!(body["total_questions"], json!(2));

    // categories와 current_category는 동일한 전체 조회 테이블입니다
    assert_eq!(body["categories"], body["current_category"]);
    assert_eq!(body["categories"]["1"], json!("Science"));
}

#[tokio::test]
async fn list_questions_beyond_last_page_is_not_found() {
    let pool = test_pool().await;
    seed_questions(&pool, 12, 1).await;
    let app = routes::app(AppState { pool });

    let (status, body) = get(&app, "/questions?page=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Resource Not Found Error"));
}

#[tokio::test]
async fn delete_question_twice_fails_second_time() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    let app = routes::app(AppState { pool });

    let (status, body) = send(&app, "DELETE", "/questions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Question deleted"));
    assert_eq!(body["id"], json!(2));

    // 같은 id를 다시 삭제하면 422 (404가 아닌 보존된 동작)
    let (status, body) = send(&app, "DELETE", "/questions/2").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!(422));
    assert_eq!(body["message"], json!("Unprocessable Error"));
}

#[tokio::test]
async fn created_question_appears_on_last_page() {
    let pool = test_pool().await;
    seed_questions(&pool, 10, 1).await;
    let app = routes::app(AppState { pool });

    let (status, body) = post_json(
        &app,
        "/questions",
        json!({
            "question": "What boiling point does water have?",
            "answer": "100C",
            "difficulty": 1,
            "category": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Question created"));
    // 생성된 id는 응답에 포함되지 않습니다
    assert!(body.get("id").is_none());

    // 새 질문은 id순 정렬의 마지막 페이지에 나타납니다
    let (status, body) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["questions"][0]["question"],
        json!("What boiling point does water have?")
    );
}

#[tokio::test]
async fn create_question_with_missing_field_is_unprocessable() {
    let pool = test_pool().await;
    let app = routes::app(AppState { pool });

    // answer 필드 누락
    let (status, body) = post_json(
        &app,
        "/questions",
        json!({ "question": "Incomplete?", "difficulty": 1, "category": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Unprocessable Error"));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES ('What is the title of the book?', 'Unknown', 2, 1)",
    )
    .execute(&pool)
    .await
    .unwrap();
    let app = routes::app(AppState { pool });

    let (status, upper) = post_json(&app, "/questions/search", json!({"searchTerm": "TITLE"})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, lower) = post_json(&app, "/questions/search", json!({"searchTerm": "title"})).await;
    assert_eq!(status, StatusCode::OK);

    // 대소문자가 달라도 결과 집합은 동일합니다
    assert_eq!(question_ids(&upper), question_ids(&lower));
    assert_eq!(question_ids(&upper), vec![4]);
    // 검색에서는 total_questions가 전체 매칭 건수입니다
    assert_eq!(upper["total_questions"], json!(1));
    assert_eq!(upper["current_category"], Value::Null);
}

#[tokio::test]
async fn search_with_no_matches_is_unprocessable() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    let app = routes::app(AppState { pool });

    let (status, body) =
        post_json(&app, "/questions/search", json!({"searchTerm": "zzz-no-match"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], json!("Unprocessable Error"));

    // searchTerm 필드 자체가 없어도 422
    let (status, _) = post_json(&app, "/questions/search", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn questions_by_category_filters_and_echoes_id() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    seed_questions(&pool, 2, 2).await; // id 4~5번이 카테고리 2
    let app = routes::app(AppState { pool });

    let (status, body) = get(&app, "/categories/2/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question_ids(&body), vec![4, 5]);
    assert_eq!(body["current_category"], json!(2));
    // 페이지 건수 보존 동작: 전체 필터링 건수와 같은 값이지만 의미는 페이지 크기
    assert_eq!(body["total_questions"], json!(2));
}

#[tokio::test]
async fn questions_by_empty_category_is_not_found() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    let app = routes::app(AppState { pool });

    // 질문이 없는 카테고리
    let (status, _) = get(&app, "/categories/6/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 존재하지 않는 카테고리도 같은 경로로 404
    let (status, _) = get(&app, "/categories/999/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_draw_is_deterministic() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    let app = routes::app(AppState { pool });

    let request = json!({ "previous_questions": [], "quiz_category": { "id": 0 } });

    // 같은 입력이면 항상 같은 질문이 나옵니다 (무작위가 아님)
    let (status, first) = post_json(&app, "/quizzes", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = post_json(&app, "/quizzes", request).await;
    assert_eq!(first["question"]["id"], second["question"]["id"]);
    assert_eq!(first["success"], json!(true));
}

#[tokio::test]
async fn quiz_never_repeats_until_exhausted() {
    let pool = test_pool().await;
    seed_questions(&pool, 3, 1).await;
    let app = routes::app(AppState { pool });

    // 반환된 id를 이력에 누적하면서 후보가 소진될 때까지 출제합니다
    let mut previous: Vec<i64> = Vec::new();
    for _ in 0..3 {
        let (status, body) = post_json(
            &app,
            "/quizzes",
            json!({ "previous_questions": previous, "quiz_category": { "id": 0 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    // 후보 소진 → 404
    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({ "previous_questions": previous, "quiz_category": { "id": 0 } }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Resource Not Found Error"));
}

#[tokio::test]
async fn quiz_respects_category_filter() {
    let pool = test_pool().await;
    seed_questions(&pool, 2, 1).await;
    seed_questions(&pool, 2, 2).await; // id 3~4번이 카테고리 2
    let app = routes::app(AppState { pool });

    let (status, body) = post_json(
        &app,
        "/quizzes",
        json!({ "previous_questions": [], "quiz_category": { "id": 2 } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["category"], json!(2));
    assert_eq!(body["question"]["id"], json!(3));
}

#[tokio::test]
async fn quiz_with_missing_fields_is_not_found() {
    let pool = test_pool().await;
    seed_questions(&pool, 2, 1).await;
    let app = routes::app(AppState { pool });

    // quiz_category 누락
    let (status, _) = post_json(&app, "/quizzes", json!({ "previous_questions": [] })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // previous_questions 누락
    let (status, _) =
        post_json(&app, "/quizzes", json!({ "quiz_category": { "id": 0 } })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transport_fallbacks_keep_json_error_shape() {
    let pool = test_pool().await;
    let app = routes::app(AppState { pool });

    // 등록되지 않은 경로 → 404
    let (status, body) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(404));

    // 경로는 있지만 메서드가 다름 → 405
    let (status, body) = send(&app, "PATCH", "/questions").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], json!(405));
    assert_eq!(body["message"], json!("Method Not Allowed"));
}

#[tokio::test]
async fn health_check_is_ok() {
    let pool = test_pool().await;
    let app = routes::app(AppState { pool });

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
