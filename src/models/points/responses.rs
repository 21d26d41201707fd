use crate::models::common::PaginatedResponse;
use crate::models::points::entities::PointHistory;

pub type PointHistoryListResponse = PaginatedResponse<PointHistory>;
