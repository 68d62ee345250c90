//! # 질문 데이터베이스 쿼리 모듈
//!
//! 질문 CRUD, 검색, 퀴즈 후보 선택을 담당하는 SQL 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! 페이지네이션은 SQL에 내리지 않습니다 — 목록을 전부 가져온 뒤
//! `services::pagination`이 메모리에서 잘라냅니다.

use crate::error::AppError;
use crate::models::Question;
use sqlx::SqlitePool;

/// 모든 질문을 id순으로 조회합니다.
pub async fn list_questions(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 특정 카테고리에 속한 질문들을 id순으로 조회합니다.
pub async fn questions_by_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = ? ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 질문 본문에 검색어가 부분 문자열로 포함된 질문들을 조회합니다.
///
/// `lower()` 양쪽 적용으로 대소문자를 구분하지 않습니다.
/// 빈 검색어는 모든 질문에 매칭됩니다.
///
/// `.bind()`는 SQL의 `?` 플레이스홀더에 값을 바인딩합니다.
/// 직접 문자열을 SQL에 넣지 않고 바인딩을 쓰는 이유: SQL 인젝션 방지
pub async fn search_questions(
    pool: &SqlitePool,
    term: &str,
) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE lower(question) LIKE '%' || lower(?) || '%' ORDER BY id",
    )
    .bind(term)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 새 질문을 저장합니다.
///
/// id는 AUTOINCREMENT로 자동 부여됩니다. 생성된 id는 API 응답에
/// 포함되지 않으므로 여기서도 반환하지 않습니다.
pub async fn create_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await?;

    Ok(())
}

/// id로 질문을 삭제합니다.
///
/// 조회 후 삭제의 두 단계로 나누면 그 사이에 다른 요청이 끼어들 수 있으므로,
/// 조건부 DELETE 한 문장으로 수행하고 `rows_affected()`로 결과를 판정합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공 (1행 이상 삭제됨)
/// - `false`: 해당 id의 질문이 존재하지 않아 삭제된 행이 없음
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    // rows_affected(): 이 쿼리로 영향받은 행 수를 반환
    Ok(result.rows_affected() > 0)
}

/// 퀴즈 후보 중 첫 번째 질문을 선택합니다.
///
/// 후보 집합: 아직 출제되지 않은(`previous`에 없는) 질문 전체.
/// `category_id != 0`이면 해당 카테고리로 제한합니다 (0은 전체를 뜻하는 센티널).
///
/// ORDER BY를 걸지 않은 것은 의도입니다 — 선택은 저장 엔진의 기본 순서에서
/// 첫 번째 후보를 고르며, 같은 `previous` 목록에 대해 항상 같은 질문을
/// 반환합니다 (무작위가 아닌 결정적 선택).
pub async fn quiz_question(
    pool: &SqlitePool,
    previous: &[i64],
    category_id: i64,
) -> Result<Option<Question>, AppError> {
    let candidates = if category_id != 0 {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ?",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions",
        )
        .fetch_all(pool)
        .await?
    };

    // 출제 이력 제외는 메모리에서 수행합니다
    // (SQLite 바인딩은 가변 길이 IN 목록을 직접 지원하지 않음)
    Ok(candidates
        .into_iter()
        .find(|q| !previous.contains(&q.id)))
}
