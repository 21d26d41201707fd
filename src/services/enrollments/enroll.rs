use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::{RequireCourseAccess, RequireJWT};
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 选修课程；路由层的访问闸门已限定 Guest 掩码，
/// 已是课程成员（学生或教师）的请求到不了这里。
pub async fn enroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
    enroll_data: EnrollRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 闸门已加载课程
    let course = match RequireCourseAccess::extract_course(request) {
        Some(course) => course,
        None => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Course not loaded by access gate",
                )),
            );
        }
    };

    // 选课密码精确比对；不匹配不落任何记录
    if enroll_data.secret != course.enroll_secret {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EnrollSecretMismatch,
            "secret: 选课密码错误",
        )));
    }

    match storage
        .create_enrollment(course_id, user_id, enroll_data.seat)
        .await
    {
        Ok(enrollment) => {
            tracing::info!("User {} enrolled in course {}", user_id, course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Enrolled")))
        }
        Err(e) => {
            tracing::error!("Enrollment failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment failed: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest, web};
    use std::sync::Arc;

    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::{memory_storage, seed_user};

    #[tokio::test]
    async fn test_wrong_secret_creates_no_enrollment() {
        let backend = memory_storage().await;
        let teacher = seed_user(&backend, "teacher", UserRole::Teacher).await;
        let student = seed_user(&backend, "student", UserRole::User).await;
        let course = backend
            .create_course_impl(teacher.id, "数据结构", "open-sesame")
            .await
            .unwrap();

        let storage: Arc<dyn Storage> = Arc::new(backend.clone());
        let req = TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();
        req.extensions_mut().insert(student.clone());
        req.extensions_mut().insert(course.clone());

        let service = EnrollmentService::new_lazy();

        // 密码不对：400，且不落任何选课记录
        let resp = enroll(
            &service,
            &req,
            course.id,
            EnrollRequest {
                secret: "guess".to_string(),
                seat: 7,
            },
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(
            backend
                .get_enrollment_impl(course.id, student.id)
                .await
                .unwrap()
                .is_none()
        );

        // 密码正确：201，记录带上座号
        let resp = enroll(
            &service,
            &req,
            course.id,
            EnrollRequest {
                secret: "open-sesame".to_string(),
                seat: 7,
            },
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let row = backend
            .get_enrollment_impl(course.id, student.id)
            .await
            .unwrap()
            .expect("enrollment row after correct secret");
        assert_eq!(row.seat, 7);
    }
}
