//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod courses;
mod enrollments;
mod files;
mod messages;
mod points;
mod users;
mod works;

use crate::config::AppConfig;
use crate::errors::{CourseHubError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CourseHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CourseHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CourseHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CourseHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CourseHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginationQuery,
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
    points::responses::PointHistoryListResponse,
    users::{
        entities::{User, UserRole},
        requests::{UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
    works::entities::Work,
};
use crate::storage::{GradeOutcome, NewUser, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_user_password_impl(id, password_hash).await
    }

    async fn set_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        self.set_user_role_impl(id, role).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 课程模块
    async fn create_course(
        &self,
        teacher_id: i64,
        name: &str,
        enroll_secret: &str,
    ) -> Result<Course> {
        self.create_course_impl(teacher_id, name, enroll_secret)
            .await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        course_id: i64,
        student_id: i64,
        seat: i32,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(course_id, student_id, seat)
            .await
    }

    async fn get_enrollment(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(course_id, student_id).await
    }

    async fn update_enrollment_seat(
        &self,
        course_id: i64,
        student_id: i64,
        seat: i32,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_seat_impl(course_id, student_id, seat)
            .await
    }

    async fn list_roster(&self, course_id: i64) -> Result<Vec<RosterEntry>> {
        self.list_roster_impl(course_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(course_id, assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    // 提交模块
    async fn submit_work(
        &self,
        assignment_id: i64,
        user_id: i64,
        memo: &str,
        attachment_token: Option<&str>,
    ) -> Result<Work> {
        self.submit_work_impl(assignment_id, user_id, memo, attachment_token)
            .await
    }

    async fn get_work_by_id(&self, work_id: i64) -> Result<Option<Work>> {
        self.get_work_by_id_impl(work_id).await
    }

    async fn get_work_by_assignment_and_user(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Work>> {
        self.get_work_by_assignment_and_user_impl(assignment_id, user_id)
            .await
    }

    async fn update_work_content(
        &self,
        work_id: i64,
        user_id: i64,
        memo: Option<&str>,
        attachment_token: Option<&str>,
    ) -> Result<Option<Work>> {
        self.update_work_content_impl(work_id, user_id, memo, attachment_token)
            .await
    }

    async fn grade_work(&self, work_id: i64, new_score: i32) -> Result<Option<GradeOutcome>> {
        self.grade_work_impl(work_id, new_score).await
    }

    async fn list_work_matrix(
        &self,
        course_id: i64,
        assignment_id: i64,
    ) -> Result<Vec<WorkMatrixRow>> {
        self.list_work_matrix_impl(course_id, assignment_id).await
    }

    // 积点模块
    async fn list_point_histories_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<PointHistoryListResponse> {
        self.list_point_histories_with_pagination_impl(user_id, query)
            .await
    }

    // 消息模块
    async fn create_message(
        &self,
        sender_id: i64,
        course_id: Option<i64>,
        recipient_id: Option<i64>,
        title: &str,
        body: &str,
    ) -> Result<Message> {
        self.create_message_impl(sender_id, course_id, recipient_id, title, body)
            .await
    }

    async fn get_message_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        self.get_message_by_id_impl(message_id).await
    }

    async fn mark_message_read(&self, message_id: i64, user_id: i64) -> Result<()> {
        self.mark_message_read_impl(message_id, user_id).await
    }

    async fn list_inbox_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        self.list_inbox_with_pagination_impl(user_id, query).await
    }

    async fn list_outbox_with_pagination(
        &self,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        self.list_outbox_with_pagination_impl(user_id, query).await
    }

    async fn list_notices_with_pagination(
        &self,
        course_id: i64,
        user_id: i64,
        query: PaginationQuery,
    ) -> Result<MessageListResponse> {
        self.list_notices_with_pagination_impl(course_id, user_id, query)
            .await
    }

    // 文件模块
    async fn create_file(
        &self,
        token: &str,
        original_name: &str,
        stored_name: &str,
        size: i64,
        content_type: &str,
        uploader_id: i64,
    ) -> Result<File> {
        self.create_file_impl(token, original_name, stored_name, size, content_type, uploader_id)
            .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }

    async fn delete_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.delete_file_by_token_impl(token).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SeaOrmStorage;
    use crate::models::users::entities::{User, UserRole};
    use crate::storage::NewUser;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    /// 基于内存 SQLite 的存储实例，每次调用都是一张白纸
    pub async fn memory_storage() -> SeaOrmStorage {
        // 内存库按连接隔离，连接池必须收敛到单连接
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:".to_owned());
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt)
            .await
            .expect("connect in-memory sqlite");
        Migrator::up(&db, None)
            .await
            .expect("run migrations");
        SeaOrmStorage { db }
    }

    pub async fn seed_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
        storage
            .create_user_impl(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash: "x".to_string(),
                role,
                real_name: None,
                school: None,
            })
            .await
            .expect("seed user")
    }
}
