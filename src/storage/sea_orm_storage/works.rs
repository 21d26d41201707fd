//! 作业提交存储操作
//!
//! 提交与评分都会顺带写积点流水，两步在同一事务内完成，
//! 不会出现"提交成功但积点没到账"的中间状态。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::point_histories::ActiveModel as PointHistoryActiveModel;
use crate::entity::users::Entity as Users;
use crate::entity::works::{ActiveModel, Column, Entity as Works};
use crate::errors::{CourseHubError, Result};
use crate::models::{
    assignments::responses::WorkMatrixRow,
    points::scoring::{SUBMISSION_POINTS, SUBMISSION_REASON, grading_delta, grading_reason},
    works::entities::{UNGRADED, Work},
};
use crate::storage::GradeOutcome;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait, Set,
};

impl SeaOrmStorage {
    /// 创建提交并累积提交积点（同一事务）
    pub async fn submit_work_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
        memo: &str,
        attachment_token: Option<&str>,
    ) -> Result<Work> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            user_id: Set(user_id),
            memo: Set(memo.to_string()),
            attachment_token: Set(attachment_token.map(|t| t.to_string())),
            score: Set(UNGRADED),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let work = model
            .insert(&txn)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("创建提交失败: {e}")))?;

        // 每次提交固定 +2，不去重
        let ledger = PointHistoryActiveModel {
            user_id: Set(user_id),
            assignment_id: Set(assignment_id),
            reason: Set(SUBMISSION_REASON.to_string()),
            point: Set(SUBMISSION_POINTS),
            created_at: Set(now),
            ..Default::default()
        };

        ledger
            .insert(&txn)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("写入积点流水失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(work.into_work())
    }

    /// 通过 ID 获取提交
    pub async fn get_work_by_id_impl(&self, work_id: i64) -> Result<Option<Work>> {
        let result = Works::find_by_id(work_id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_work()))
    }

    /// 获取用户对某作业的最新提交
    pub async fn get_work_by_assignment_and_user_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Work>> {
        let result = Works::find()
            .filter(
                Condition::all()
                    .add(Column::AssignmentId.eq(assignment_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_work()))
    }

    /// 更新提交内容
    ///
    /// 过滤条件带 user_id 与 score == 0，记录已评分或易主时不会误改。
    pub async fn update_work_content_impl(
        &self,
        work_id: i64,
        user_id: i64,
        memo: Option<&str>,
        attachment_token: Option<&str>,
    ) -> Result<Option<Work>> {
        let now = chrono::Utc::now().timestamp();

        let mut update = Works::update_many()
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(
                Condition::all()
                    .add(Column::Id.eq(work_id))
                    .add(Column::UserId.eq(user_id))
                    .add(Column::Score.eq(UNGRADED)),
            );

        if let Some(memo) = memo {
            update = update.col_expr(Column::Memo, sea_orm::sea_query::Expr::value(memo));
        }

        if let Some(token) = attachment_token {
            update = update.col_expr(
                Column::AttachmentToken,
                sea_orm::sea_query::Expr::value(Some(token)),
            );
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("更新提交失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_work_by_id_impl(work_id).await
    }

    /// 评分：读旧分、写新分、跨档落账，全程同一事务
    pub async fn grade_work_impl(
        &self,
        work_id: i64,
        new_score: i32,
    ) -> Result<Option<GradeOutcome>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Works::find_by_id(work_id)
            .one(&txn)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询提交失败: {e}")))?
        else {
            txn.rollback()
                .await
                .map_err(|e| CourseHubError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        };

        let old_score = existing.score;

        let model = ActiveModel {
            id: Set(work_id),
            score: Set(new_score),
            updated_at: Set(now),
            ..Default::default()
        };

        let work = model
            .update(&txn)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("写入评分失败: {e}")))?;

        // 同档改分不落账
        let ledger_entry = match grading_delta(old_score, new_score) {
            Some(delta) => {
                let ledger = PointHistoryActiveModel {
                    user_id: Set(work.user_id),
                    assignment_id: Set(work.assignment_id),
                    reason: Set(grading_reason(old_score, new_score)),
                    point: Set(delta),
                    created_at: Set(now),
                    ..Default::default()
                };

                let entry = ledger.insert(&txn).await.map_err(|e| {
                    CourseHubError::database_operation(format!("写入积点流水失败: {e}"))
                })?;
                Some(entry.into_point_history())
            }
            None => None,
        };

        txn.commit()
            .await
            .map_err(|e| CourseHubError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(GradeOutcome {
            work: work.into_work(),
            ledger_entry,
        }))
    }

    /// 教师视角的交作业状况：按座号列出每位修课学生及其提交
    pub async fn list_work_matrix_impl(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<WorkMatrixRow>> {
        let roster = Enrollments::find()
            .find_also_related(Users)
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .order_by_asc(EnrollmentColumn::Seat)
            .order_by_asc(EnrollmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询修课名单失败: {e}")))?;

        let works = Works::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("查询提交列表失败: {e}")))?;

        // 同一学生多次提交时取最新一条
        let mut by_user: HashMap<i64, crate::entity::works::Model> = HashMap::new();
        for work in works {
            by_user.insert(work.user_id, work);
        }

        Ok(roster
            .into_iter()
            .map(|(enrollment, user)| {
                let work = by_user.get(&enrollment.student_id);
                WorkMatrixRow {
                    seat: enrollment.seat,
                    student_id: enrollment.student_id,
                    real_name: user.and_then(|u| u.real_name),
                    work_id: work.map(|w| w.id),
                    submitted: work.map(|w| {
                        chrono::DateTime::<chrono::Utc>::from_timestamp(w.created_at, 0)
                            .unwrap_or_default()
                    }),
                    score: work.map(|w| w.score),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaginationQuery;
    use crate::models::assignments::entities::Assignment;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::users::entities::{User, UserRole};
    use crate::storage::sea_orm_storage::test_support::{memory_storage, seed_user};

    async fn seed_assignment(storage: &SeaOrmStorage) -> (Assignment, User) {
        let teacher = seed_user(storage, "teacher", UserRole::Teacher).await;
        let student = seed_user(storage, "student", UserRole::User).await;
        let course = storage
            .create_course_impl(teacher.id, "算法设计", "s3cret")
            .await
            .expect("seed course");
        let assignment = storage
            .create_assignment_impl(
                course.id,
                CreateAssignmentRequest {
                    title: "第一次作业".to_string(),
                    description: None,
                },
            )
            .await
            .expect("seed assignment");
        (assignment, student)
    }

    #[tokio::test]
    async fn test_submit_then_regrade_ledger_accrual() {
        let storage = memory_storage().await;
        let (assignment, student) = seed_assignment(&storage).await;

        // 提交固定 +2
        let work = storage
            .submit_work_impl(assignment.id, student.id, "心得", None)
            .await
            .unwrap();
        assert_eq!(work.score, UNGRADED);

        // 0 -> 85：升一档，+1
        let outcome = storage.grade_work_impl(work.id, 85).await.unwrap().unwrap();
        let entry = outcome.ledger_entry.expect("0->85 crosses a tier");
        assert_eq!(entry.point, 1);
        assert_eq!(entry.reason, "grading: 0->85");

        // 85 -> 92：再升一档，+1
        let outcome = storage.grade_work_impl(work.id, 92).await.unwrap().unwrap();
        assert_eq!(outcome.ledger_entry.expect("85->92 crosses a tier").point, 1);

        // 92 -> 91：同档，分数落库但不落账
        let outcome = storage.grade_work_impl(work.id, 91).await.unwrap().unwrap();
        assert!(outcome.ledger_entry.is_none());
        assert_eq!(outcome.work.score, 91);

        let ledger = storage
            .list_point_histories_with_pagination_impl(
                student.id,
                PaginationQuery { page: 1, size: 20 },
            )
            .await
            .unwrap();
        assert_eq!(ledger.items.len(), 3);
        assert_eq!(ledger.items.iter().map(|h| h.point).sum::<i32>(), 4);
    }

    #[tokio::test]
    async fn test_scored_work_refuses_content_update() {
        let storage = memory_storage().await;
        let (assignment, student) = seed_assignment(&storage).await;

        let work = storage
            .submit_work_impl(assignment.id, student.id, "初稿", None)
            .await
            .unwrap();

        // 未评分时本人可改
        let updated = storage
            .update_work_content_impl(work.id, student.id, Some("二稿"), None)
            .await
            .unwrap()
            .expect("ungraded work is editable by its owner");
        assert_eq!(updated.memo, "二稿");

        // 非本人改不动
        let foreign = storage
            .update_work_content_impl(work.id, student.id + 1, Some("冒名"), None)
            .await
            .unwrap();
        assert!(foreign.is_none());

        // 评分后锁定
        storage.grade_work_impl(work.id, 85).await.unwrap().unwrap();
        let locked = storage
            .update_work_content_impl(work.id, student.id, Some("三稿"), None)
            .await
            .unwrap();
        assert!(locked.is_none());

        let current = storage.get_work_by_id_impl(work.id).await.unwrap().unwrap();
        assert_eq!(current.memo, "二稿");
        assert_eq!(current.score, 85);
    }
}
