//! 积点流水存储操作
//!
//! 流水的写入都发生在 works.rs 的事务里，这里只提供查询。

use super::SeaOrmStorage;
use crate::entity::point_histories::{Column, Entity as PointHistories};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery, points::responses::PointHistoryListResponse,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 分页列出用户的积点流水，新到旧
    pub async fn list_point_histories_with_pagination_impl(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<PointHistoryListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let select = PointHistories::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询流水总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询流水页数失败: {e}")))?;

        let histories = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询流水列表失败: {e}")))?;

        Ok(PointHistoryListResponse {
            items: histories
                .into_iter()
                .map(|m| m.into_point_history())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
