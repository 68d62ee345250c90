//! # Trivia API 라이브러리 루트
//!
//! 퀴즈 질문/카테고리 CRUD와 퀴즈 출제 엔드포인트를 제공하는
//! 작은 HTTP 서비스입니다. 모듈 구성:
//! - `config`: 환경변수 기반 설정
//! - `db`: SQLite 쿼리 함수 (데이터 접근 계층)
//! - `error`: AppError와 HTTP 에러 응답 변환
//! - `models`: 엔티티와 요청 구조체
//! - `routes`: Axum 핸들러와 라우터 구성
//! - `services`: 페이지네이션 헬퍼
//!
//! 바이너리(main.rs)와 통합 테스트(tests/)가 같은 라우터 구성을
//! 공유할 수 있도록 라이브러리 크레이트로 분리했습니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
