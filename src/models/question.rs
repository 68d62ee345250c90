//! # 질문 모델 정의
//!
//! 질문(Question) 엔티티와 관련 요청 구조체들을 정의합니다.
//!
//! ## 구조체 역할
//! - `Question`: 데이터베이스에 저장된 질문을 표현 (응답용 포맷과 동일)
//! - `CreateQuestionRequest`: 새 질문 생성 시 클라이언트가 보내는 JSON 본문
//! - `SearchRequest`: 질문 검색 시 클라이언트가 보내는 JSON 본문
//! - `PageQuery`: `?page=N` 쿼리 파라미터

use serde::{Deserialize, Serialize};

/// 질문 엔티티 — DB의 `questions` 테이블 한 행(row)에 대응합니다.
///
/// 이 구조체의 Serialize 결과가 그대로 API 응답의 "formatted representation"
/// `{id, question, answer, category, difficulty}`이 됩니다.
///
/// # derive 매크로 설명
/// - `Serialize`: 이 구조체를 JSON으로 변환할 수 있게 합니다 (API 응답 시 사용)
/// - `sqlx::FromRow`: SQL 쿼리 결과(행)를 이 구조체로 자동 매핑합니다
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Question {
    /// 질문 고유 식별자 (AUTOINCREMENT 정수)
    pub id: i64,
    /// 질문 본문
    pub question: String,
    /// 정답
    pub answer: String,
    /// 소속 카테고리 ID (categories.id 참조)
    pub category: i64,
    /// 난이도 점수
    pub difficulty: i64,
}

/// 질문 생성 요청 — `POST /questions`의 요청 본문(body)에 해당합니다.
///
/// 모든 필드가 Option인 이유: 필수 필드 누락을 Axum의 기본 400 응답이 아니라
/// 핸들러에서 직접 검증하여 422(Unprocessable)로 매핑하기 위해서입니다.
/// 검증은 핸들러의 비즈니스 로직에 도달하기 전에 수행됩니다.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// 질문 검색 요청 — `POST /questions/search`의 요청 본문에 해당합니다.
///
/// `#[serde(rename = "searchTerm")]`: 클라이언트는 camelCase 키를 보내지만
/// Rust에서는 snake_case 필드명을 쓰기 위해 이름을 매핑합니다.
/// 빈 문자열도 유효한 검색어입니다 (전체 질문이 매칭됨).
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// `?page=N` 쿼리 파라미터를 파싱하는 구조체입니다.
///
/// 페이지 번호가 없으면 None이며, 페이지네이션 헬퍼가 기본값 1을 적용합니다.
#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<u32>,
}
