pub mod score;
pub mod submit;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::works::requests::{ScoreWorkRequest, SubmitWorkRequest, UpdateWorkRequest};
use crate::storage::Storage;

pub struct WorkService {
    storage: Option<Arc<dyn Storage>>,
}

impl WorkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 繳交作业
    pub async fn submit_work(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        submit_data: SubmitWorkRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_work(self, request, assignment_id, submit_data).await
    }

    // 修改提交（仅限本人且未评分）
    pub async fn update_work(
        &self,
        request: &HttpRequest,
        work_id: i64,
        update_data: UpdateWorkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_work(self, request, work_id, update_data).await
    }

    // 批改评分
    pub async fn score_work(
        &self,
        request: &HttpRequest,
        work_id: i64,
        score_data: ScoreWorkRequest,
    ) -> ActixResult<HttpResponse> {
        score::score_work(self, request, work_id, score_data).await
    }
}
