//! 站内信存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::message_reads::{
    ActiveModel as MessageReadActiveModel, Column as MessageReadColumn, Entity as MessageReads,
};
use crate::entity::messages::{ActiveModel, Column, Entity as Messages};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    messages::{
        entities::Message,
        responses::{MessageListItem, MessageListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};

impl SeaOrmStorage {
    /// 发送私信或张贴课程公告
    pub async fn create_message_impl(
        &self,
        sender_id: i64,
        course_id: Option<i64>,
        recipient_id: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            course_id: Set(course_id),
            recipient_id: Set(recipient_id),
            title: Set(title.to_string()),
            body: Set(body.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("发送消息失败: {e}")))?;

        Ok(result.into_message())
    }

    /// 通过 ID 获取消息
    pub async fn get_message_by_id_impl(&self, message_id: i64) -> Result<Option<Message>> {
        let result = Messages::find_by_id(message_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询消息失败: {e}")))?;

        Ok(result.map(|m| m.into_message()))
    }

    /// 标记已读：首次打开落纪录，重复打开不动
    pub async fn mark_message_read_impl(&self, message_id: i64, user_id: i64) -> Result<()> {
        let existing = MessageReads::find()
            .filter(
                Condition::all()
                    .add(MessageReadColumn::MessageId.eq(message_id))
                    .add(MessageReadColumn::UserId.eq(user_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询阅读纪录失败: {e}")))?;

        if existing.is_some() {
            return Ok(());
        }

        let model = MessageReadActiveModel {
            message_id: Set(message_id),
            user_id: Set(user_id),
            read_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("写入阅读纪录失败: {e}")))?;

        Ok(())
    }

    /// 收件匣：发给我的私信 + 我修课课程的公告
    pub async fn list_inbox_with_pagination_impl(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        let course_ids: Vec<i64> = Enrollments::find()
            .select_only()
            .column(EnrollmentColumn::CourseId)
            .filter(EnrollmentColumn::StudentId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询修课课程失败: {e}")))?;

        let mut condition = Condition::any().add(Column::RecipientId.eq(user_id));
        if !course_ids.is_empty() {
            condition = condition.add(Column::CourseId.is_in(course_ids));
        }

        let select = Messages::find()
            .filter(condition)
            .order_by_desc(Column::Id);

        self.paginate_messages(select, user_id, query).await
    }

    /// 寄件匣
    pub async fn list_outbox_with_pagination_impl(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        let select = Messages::find()
            .filter(Column::SenderId.eq(user_id))
            .order_by_desc(Column::Id);

        self.paginate_messages(select, user_id, query).await
    }

    /// 课程公告列表
    pub async fn list_notices_with_pagination_impl(
        &self,
        course_id: i64,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        let select = Messages::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::Id);

        self.paginate_messages(select, user_id, query).await
    }

    /// 分页取信并标注当前用户的阅读时间
    async fn paginate_messages(
        &self,
        select: Select<Messages>,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询消息总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询消息页数失败: {e}")))?;

        let messages = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询消息列表失败: {e}")))?;

        // 标注本页消息的阅读时间
        let mut reads: HashMap<i64, i64> = HashMap::new();
        if !messages.is_empty() {
            let message_ids: Vec<i64> = messages.iter().map(|m| m.id).collect();
            let records = MessageReads::find()
                .filter(
                    Condition::all()
                        .add(MessageReadColumn::UserId.eq(user_id))
                        .add(MessageReadColumn::MessageId.is_in(message_ids)),
                )
                .all(&self.db)
                .await
                .map_err(|e| {
                    CourseHubError::database_operation(format!("查询阅读纪录失败: {e}"))
                })?;
            for record in records {
                reads.insert(record.message_id, record.read_at);
            }
        }

        Ok(MessageListResponse {
            items: messages
                .into_iter()
                .map(|m| {
                    let read = reads.get(&m.id).copied();
                    MessageListItem {
                        message: m.into_message(),
                        read: read.map(|t| {
                            chrono::DateTime::<chrono::Utc>::from_timestamp(t, 0)
                                .unwrap_or_default()
                        }),
                    }
                })
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
