//! # 서비스(비즈니스 로직) 모듈
//!
//! 데이터베이스 접근(db/)과 HTTP 핸들러(routes/) 사이의
//! 순수 로직을 모아둔 모듈입니다.
//! - `pagination`: 질문 목록을 고정 크기 페이지로 자르는 헬퍼

pub mod pagination;

pub use pagination::*;
