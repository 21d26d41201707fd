use std::path::Path;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::WorkService;
use crate::middlewares::RequireJWT;
use crate::models::works::requests::UpdateWorkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use std::sync::Arc;

// 修改提交
//
// 仅限本人且尚未评分。换附件时顺手清掉旧附件，
// 清理失败只记日志，不影响本次修改。
pub async fn update_work(
    service: &WorkService,
    request: &HttpRequest,
    work_id: i64,
    update_data: UpdateWorkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user claims",
            )));
        }
    };

    let work = match storage.get_work_by_id(work_id).await {
        Ok(Some(work)) => work,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::WorkNotFound,
                "Work not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load work {}: {}", work_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load work: {e}"),
                )),
            );
        }
    };

    if work.user_id != user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::WorkNotOwned,
            "Only the submitter can edit this work",
        )));
    }

    if work.is_graded() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::WorkAlreadyScored,
            "Graded work can no longer be edited",
        )));
    }

    // 换附件时待回收的旧附件；更新成功后才动手
    let stale_token = match (&work.attachment_token, &update_data.attachment_token) {
        (Some(old), Some(new)) if old != new => Some(old.clone()),
        _ => None,
    };

    match storage
        .update_work_content(
            work_id,
            user.id,
            update_data.memo.as_deref(),
            update_data.attachment_token.as_deref(),
        )
        .await
    {
        Ok(Some(work)) => {
            if let Some(old_token) = &stale_token {
                let upload_dir = &service.get_config().upload.dir;
                remove_stale_attachment(&storage, upload_dir, old_token).await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(work, "Work updated")))
        }
        // 存储层按 本人+未评分 过滤，走到这里说明并发中被评分了
        Ok(None) => Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::WorkAlreadyScored,
            "Graded work can no longer be edited",
        ))),
        Err(e) => {
            tracing::error!("Failed to update work {}: {}", work_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update work: {e}"),
                )),
            )
        }
    }
}

// 删除附件纪录与磁盘文件；文件已不在视同成功
async fn remove_stale_attachment(storage: &Arc<dyn Storage>, upload_dir: &str, token: &str) {
    match storage.delete_file_by_token(token).await {
        Ok(Some(file)) => {
            let path = Path::new(upload_dir).join(&file.stored_name);
            if let Err(e) = std::fs::remove_file(&path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove stale attachment {:?}: {}", path, e);
                }
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!("Failed to delete stale attachment record {}: {}", token, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest, web};
    use std::sync::Arc;

    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::users::entities::UserRole;
    use crate::services::WorkService;
    use crate::storage::sea_orm_storage::test_support::{memory_storage, seed_user};

    #[tokio::test]
    async fn test_scored_work_update_forbidden_and_attachment_kept() {
        let backend = memory_storage().await;
        let teacher = seed_user(&backend, "teacher", UserRole::Teacher).await;
        let student = seed_user(&backend, "student", UserRole::User).await;
        let course = backend
            .create_course_impl(teacher.id, "操作系统", "s3cret")
            .await
            .unwrap();
        let assignment = backend
            .create_assignment_impl(
                course.id,
                CreateAssignmentRequest {
                    title: "实验报告".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        let old_token = "11111111-2222-3333-4444-555555555555";
        backend
            .create_file_impl(old_token, "report.pdf", "1-old.bin", 42, "application/pdf", student.id)
            .await
            .unwrap();
        let work = backend
            .submit_work_impl(assignment.id, student.id, "初稿", Some(old_token))
            .await
            .unwrap();
        backend.grade_work_impl(work.id, 85).await.unwrap().unwrap();

        let storage: Arc<dyn Storage> = Arc::new(backend.clone());
        let req = TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();
        req.extensions_mut().insert(student.clone());

        let service = WorkService::new_lazy();
        let resp = update_work(
            &service,
            &req,
            work.id,
            UpdateWorkRequest {
                memo: Some("改后".to_string()),
                attachment_token: Some("66666666-7777-8888-9999-000000000000".to_string()),
            },
        )
        .await
        .unwrap();

        // 已评分：403，且旧附件纪录原封不动
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let kept = backend.get_file_by_token_impl(old_token).await.unwrap();
        assert!(kept.is_some());
        let current = backend.get_work_by_id_impl(work.id).await.unwrap().unwrap();
        assert_eq!(current.memo, "初稿");
        assert_eq!(current.attachment_token.as_deref(), Some(old_token));
    }
}
