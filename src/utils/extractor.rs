//! 路径参数提取器
//!
//! 从路径中提取并校验 ID，非法输入在进入处理函数之前
//! 就被拒绝为 400，处理函数只会看到合法的正整数 ID。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|s| s.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(actix_web::error::InternalError::from_response(
                        concat!("invalid ", $param),
                        HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Missing or invalid ", $param),
                        )),
                    )
                    .into()),
                })
            }
        }
    };
}

define_id_extractor!(SafeCourseIdI64, "course_id");
define_id_extractor!(SafeAssignmentIdI64, "assignment_id");
define_id_extractor!(SafeWorkIdI64, "work_id");
define_id_extractor!(SafeUserIdI64, "user_id");
define_id_extractor!(SafeMessageIdI64, "message_id");

/// 附件 token 提取器（必须是合法 UUID）
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .match_info()
            .get("file_token")
            .filter(|s| uuid::Uuid::parse_str(s).is_ok())
            .map(|s| s.to_string());

        ready(match token {
            Some(token) => Ok(SafeFileToken(token)),
            None => Err(actix_web::error::InternalError::from_response(
                "invalid file token",
                HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Missing or invalid file token",
                )),
            )
            .into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn extract_token(req: &HttpRequest) -> Result<SafeFileToken, actix_web::Error> {
        SafeFileToken::from_request(req, &mut Payload::None).into_inner()
    }

    #[test]
    fn test_file_token_reads_download_route_param() {
        // 下载路由声明的是 {file_token}，提取器必须读同一个名字
        let req = TestRequest::default()
            .param("file_token", "a1b2c3d4-e5f6-7890-abcd-ef1234567890")
            .to_http_request();

        let token = extract_token(&req).expect("valid uuid path param");
        assert_eq!(token.0, "a1b2c3d4-e5f6-7890-abcd-ef1234567890");
    }

    #[test]
    fn test_file_token_rejects_non_uuid() {
        let req = TestRequest::default()
            .param("file_token", "../../etc/passwd")
            .to_http_request();

        assert!(extract_token(&req).is_err());
    }

    #[test]
    fn test_id_extractor_rejects_zero_and_garbage() {
        let req = TestRequest::default()
            .param("course_id", "0")
            .to_http_request();
        assert!(
            SafeCourseIdI64::from_request(&req, &mut Payload::None)
                .into_inner()
                .is_err()
        );

        let req = TestRequest::default()
            .param("course_id", "42")
            .to_http_request();
        let id = SafeCourseIdI64::from_request(&req, &mut Payload::None)
            .into_inner()
            .expect("positive id");
        assert_eq!(id.0, 42);
    }
}
