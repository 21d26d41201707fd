use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListResponse, WorkMatrixRow},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{entities::Enrollment, responses::RosterEntry},
    files::entities::File,
    messages::{entities::Message, responses::MessageListResponse},
    points::{entities::PointHistory, responses::PointHistoryListResponse},
    users::{
        entities::{User, UserRole},
        requests::{UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
    works::entities::Work,
    PaginationQuery,
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 创建存储后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 新建用户参数（密码已哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub real_name: Option<String>,
    pub school: Option<String>,
}

/// 评分结果：更新后的提交与（跨档时的）流水
#[derive(Debug, Clone)]
pub struct GradeOutcome {
    pub work: Work,
    pub ledger_entry: Option<PointHistory>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新用户密码（已哈希）
    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // 设置用户系统角色（教师身份切换）
    async fn set_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数（初始管理员种子用）
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, teacher_id: i64, name: &str, enroll_secret: &str)
        -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;

    /// 选课管理方法
    // 创建选课记录（密码比对由服务层完成）
    async fn create_enrollment(
        &self,
        course_id: i64,
        student_id: i64,
        seat: i32,
    ) -> Result<Enrollment>;
    // 获取 (course, student) 的选课记录
    async fn get_enrollment(&self, course_id: i64, student_id: i64)
        -> Result<Option<Enrollment>>;
    // 变更座号（按 (course, student) 定位）
    async fn update_enrollment_seat(
        &self,
        course_id: i64,
        student_id: i64,
        seat: i32,
    ) -> Result<Option<Enrollment>>;
    // 修课名单，按座号排序，附累计积点
    async fn list_roster(&self, course_id: i64) -> Result<Vec<RosterEntry>>;

    /// 作业管理方法
    // 新增作业
    async fn create_assignment(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 修改作业
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 列出课程作业，标注指定用户的提交时间
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;

    /// 作业提交管理方法
    // 创建提交并在同一事务中累积提交积点
    async fn submit_work(
        &self,
        assignment_id: i64,
        user_id: i64,
        memo: &str,
        attachment_token: Option<&str>,
    ) -> Result<Work>;
    // 通过ID获取提交
    async fn get_work_by_id(&self, work_id: i64) -> Result<Option<Work>>;
    // 获取用户对某作业的最新提交
    async fn get_work_by_assignment_and_user(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Work>>;
    // 更新提交内容；仅当记录仍属于该用户且未评分时生效
    async fn update_work_content(
        &self,
        work_id: i64,
        user_id: i64,
        memo: Option<&str>,
        attachment_token: Option<&str>,
    ) -> Result<Option<Work>>;
    // 评分：在同一事务中读旧分、写新分、跨档落账
    async fn grade_work(&self, work_id: i64, new_score: i32) -> Result<Option<GradeOutcome>>;
    // 教师视角的交作业状况（按座号）
    async fn list_work_matrix(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<WorkMatrixRow>>;

    /// 积点流水方法
    // 列出用户的积点流水，新到旧
    async fn list_point_histories_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<PointHistoryListResponse>;

    /// 消息管理方法
    // 发送私信或张贴课程公告
    async fn create_message(
        &self,
        sender_id: i64,
        course_id: Option<i64>,
        recipient_id: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Message>;
    // 通过ID获取消息
    async fn get_message_by_id(&self, message_id: i64) -> Result<Option<Message>>;
    // 标记已读（首次打开落纪录，重复打开不动）
    async fn mark_message_read(&self, message_id: i64, user_id: i64) -> Result<()>;
    // 收件匣：私信 + 修课课程的公告
    async fn list_inbox_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse>;
    // 寄件匣
    async fn list_outbox_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse>;
    // 课程公告列表
    async fn list_notices_with_pagination(
        &self,
        course_id: i64,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse>;

    /// 附件管理方法
    // 登记上传的附件
    async fn create_file(
        &self,
        token: &str,
        original_name: &str,
        stored_name: &str,
        size: i64,
        content_type: &str,
        uploader_id: i64,
    ) -> Result<File>;
    // 通过 token 获取附件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
    // 删除附件纪录并返回被删纪录；不存在返回 None
    async fn delete_file_by_token(&self, token: &str) -> Result<Option<File>>;
}
