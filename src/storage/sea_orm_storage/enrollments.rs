//! 选课存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::point_histories::{
    Column as PointHistoryColumn, Entity as PointHistories,
};
use crate::entity::users::Entity as Users;
use crate::errors::{CourseHubError, Result};
use crate::models::enrollments::{entities::Enrollment, responses::RosterEntry};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// 同一 (course, student) 允许存在多条记录，权限判定只看"是否存在"。
    pub async fn create_enrollment_impl(
        &self,
        course_id: i64,
        student_id: i64,
        seat: i32,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            seat: Set(seat),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 获取 (course, student) 的选课记录，存在多条时取最早一条
    pub async fn get_enrollment_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::CourseId.eq(course_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 变更座号
    pub async fn update_enrollment_seat_impl(
        &self,
        course_id: i64,
        student_id: i64,
        seat: i32,
    ) -> Result<Option<Enrollment>> {
        let existing = self.get_enrollment_impl(course_id, student_id).await?;
        let Some(enrollment) = existing else {
            return Ok(None);
        };

        let model = ActiveModel {
            id: Set(enrollment.id),
            seat: Set(seat),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新座号失败: {e}")))?;

        Ok(Some(result.into_enrollment()))
    }

    /// 修课名单：按座号排序，附每位学生的积点总和
    pub async fn list_roster_impl(&self, course_id: i64) -> Result<Vec<RosterEntry>> {
        let rows = Enrollments::find()
            .find_also_related(Users)
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Seat)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询修课名单失败: {e}")))?;

        let student_ids: Vec<i64> = rows.iter().map(|(e, _)| e.student_id).collect();

        // 一次聚合查出名单内学生的积点总和
        let sums: Vec<(i64, Option<i64>)> = if student_ids.is_empty() {
            Vec::new()
        } else {
            PointHistories::find()
                .select_only()
                .column(PointHistoryColumn::UserId)
                .column_as(PointHistoryColumn::Point.sum(), "points")
                .filter(PointHistoryColumn::UserId.is_in(student_ids))
                .group_by(PointHistoryColumn::UserId)
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| {
                    CourseHubError::database_operation(format!("统计积点总和失败: {e}"))
                })?
        };
        let points: HashMap<i64, i64> = sums
            .into_iter()
            .map(|(user_id, sum)| (user_id, sum.unwrap_or(0)))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(enrollment, user)| RosterEntry {
                enrollment_id: enrollment.id,
                student_id: enrollment.student_id,
                username: user
                    .as_ref()
                    .map(|u| u.username.clone())
                    .unwrap_or_default(),
                real_name: user.and_then(|u| u.real_name),
                seat: enrollment.seat,
                points: points.get(&enrollment.student_id).copied().unwrap_or(0),
            })
            .collect())
    }
}
