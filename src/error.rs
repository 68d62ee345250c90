//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{success, error, message}` JSON 응답으로 자동 변환
//!
//! ## 에러 코드 매핑 정책
//! 기존 클라이언트와의 호환을 위해 상태 코드 매핑을 그대로 유지합니다:
//! - 읽기 경로의 빈 결과, 퀴즈 요청의 필수 필드 누락 → 404
//! - 없는 질문 삭제, 잘못된 생성 요청, 검색 결과 0건 → 422
//!   (의미상으로는 404가 더 자연스러운 경우도 있지만, 의도적으로 보존)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 각 에러 variant는 적절한 HTTP 상태 코드와 메시지로 변환됩니다.
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    #[error("Resource Not Found Error")]
    NotFound,

    /// 처리할 수 없는 요청 (HTTP 422)
    /// 없는 질문 삭제, 필수 필드 누락, 검색 결과 없음 등에 사용됩니다.
    #[error("Unprocessable Error")]
    Unprocessable,

    /// 잘못된 요청 (HTTP 400) — 핸들러가 직접 올리지는 않는 전송 계층 폴백
    #[error("Bad Request")]
    BadRequest,

    /// 허용되지 않은 HTTP 메서드 (HTTP 405) — 라우터 폴백에서 사용
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx::Error를 AppError로 자동 변환하는 From 트레이트를 구현합니다.
    /// 이를 통해 sqlx 함수 호출에 `?` 연산자를 쓰면 자동으로 이 variant가 됩니다.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    /// AppError를 `{success: false, error: <code>, message: <text>}` 응답으로 변환합니다.
    ///
    /// 내부 에러(Database)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다 (보안을 위해).
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(ref e) => {
                // 내부 에러는 로그에 기록 (서버 관리자용)
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Display 구현(#[error("...")])이 클라이언트용 메시지를 그대로 제공합니다.
        // 결과 예: { "success": false, "error": 404, "message": "Resource Not Found Error" }
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
