pub mod enroll;
pub mod roster;
pub mod seat;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{EnrollRequest, UpdateSeatRequest};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 选修课程
    pub async fn enroll(
        &self,
        request: &HttpRequest,
        course_id: i64,
        enroll_data: EnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll(self, request, course_id, enroll_data).await
    }

    // 变更座号
    pub async fn update_seat(
        &self,
        request: &HttpRequest,
        course_id: i64,
        seat_data: UpdateSeatRequest,
    ) -> ActixResult<HttpResponse> {
        seat::update_seat(self, request, course_id, seat_data).await
    }

    // 修课名单
    pub async fn list_roster(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        roster::list_roster(self, request, course_id).await
    }
}
