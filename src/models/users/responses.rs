use crate::models::common::PaginatedResponse;
use crate::models::users::entities::User;

pub type UserListResponse = PaginatedResponse<User>;
