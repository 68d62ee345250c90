//! # 카테고리 모델 정의
//!
//! 카테고리(Category)는 질문을 분류하는 라벨입니다.
//! 이 서비스에서는 읽기 전용이며, 마이그레이션으로 미리 시드됩니다.

use serde::Serialize;
use serde_json::{Map, Value};

/// 카테고리 엔티티 — DB의 `categories` 테이블 한 행에 대응합니다.
///
/// `type`은 Rust의 예약어라서 필드명으로 쓸 수 없으므로 `kind`로 정의하고,
/// DB 컬럼명과 JSON 키는 rename 어트리뷰트로 `type`에 매핑합니다.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    /// 카테고리 고유 식별자
    pub id: i64,
    /// 카테고리 이름 (예: "Science", "Art")
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// 카테고리 목록을 `{"<id>": "<type>"}` 형태의 조회 테이블로 변환합니다.
///
/// JSON 객체의 키는 문자열이어야 하므로 id를 문자열로 변환합니다.
/// 예: `[{id:1, type:"Science"}]` → `{"1": "Science"}`
pub fn category_map(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect()
}
