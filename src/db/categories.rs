//! # 카테고리 데이터베이스 쿼리 모듈
//!
//! 카테고리는 이 서비스에서 읽기 전용이므로 조회 쿼리만 존재합니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.

use crate::error::AppError;
use crate::models::Category;
use sqlx::SqlitePool;

/// 모든 카테고리를 이름(type)순으로 조회합니다.
///
/// `sqlx::query_as::<_, Category>(sql)`:
/// - `query_as`는 SQL 결과를 지정한 구조체(Category)로 자동 변환합니다
/// - `fetch_all`은 모든 행을 Vec으로 반환합니다
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, type FROM categories ORDER BY type",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}
