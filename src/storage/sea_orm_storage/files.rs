//! 附件存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Column, Entity as Files};
use crate::errors::{CourseHubError, Result};
use crate::models::files::entities::File;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 登记上传的附件
    pub async fn create_file_impl(
        &self,
        token: &str,
        original_name: &str,
        stored_name: &str,
        size: i64,
        content_type: &str,
        uploader_id: i64,
    ) -> Result<File> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            token: Set(token.to_string()),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            size: Set(size),
            content_type: Set(content_type.to_string()),
            uploader_id: Set(uploader_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("登记附件失败: {e}")))?;

        Ok(result.into_file())
    }

    /// 通过 token 获取附件
    pub async fn get_file_by_token_impl(&self, token: &str) -> Result<Option<File>> {
        let result = Files::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询附件失败: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }

    /// 删除附件纪录并返回被删纪录
    pub async fn delete_file_by_token_impl(&self, token: &str) -> Result<Option<File>> {
        let existing = Files::find()
            .filter(Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询附件失败: {e}")))?;

        let Some(file) = existing else {
            return Ok(None);
        };

        Files::delete_by_id(file.id)
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("删除附件失败: {e}")))?;

        Ok(Some(file.into_file()))
    }
}
