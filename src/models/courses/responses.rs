use serde::{Deserialize, Serialize};

use crate::models::common::PaginatedResponse;
use crate::models::courses::entities::Course;

pub type CourseListResponse = PaginatedResponse<Course>;

// 课程详情，附当前用户在课程中的身份层级
#[derive(Debug, Serialize, Deserialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: Course,
    // guest / student / teacher
    pub level: String,
}
