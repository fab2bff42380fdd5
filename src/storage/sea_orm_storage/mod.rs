//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod class_students;
mod classes;
mod events;
mod final_averages;
mod grade_sheets;
mod marks;
mod students;
mod subjects;
mod teachers;
mod timetable_slots;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
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
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

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
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
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
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

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
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
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
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    averages::{entities::FinalAverage, requests::AverageListQuery, responses::AverageListResponse},
    class_students::{
        entities::ClassStudent,
        requests::RosterListQuery,
        responses::RosterListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    events::{
        entities::Event,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
        responses::EventListResponse,
    },
    grade_sheets::responses::GradeSheetResponse,
    marks::{
        entities::Mark,
        requests::{MarkListQuery, RecordMarkRequest, UpdateMarkRequest},
        responses::MarkListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    timetables::{
        entities::TimetableSlot,
        requests::{CreateTimetableSlotRequest, TimetableListQuery, UpdateTimetableSlotRequest},
        responses::TimetableListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 学科模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 名册模块
    async fn add_student_to_class(&self, class_id: i64, student_id: i64) -> Result<ClassStudent> {
        self.add_student_to_class_impl(class_id, student_id).await
    }

    async fn remove_student_from_class(&self, class_id: i64, student_id: i64) -> Result<bool> {
        self.remove_student_from_class_impl(class_id, student_id)
            .await
    }

    async fn get_class_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<ClassStudent>> {
        self.get_class_student_impl(class_id, student_id).await
    }

    async fn list_class_students_with_pagination(
        &self,
        class_id: i64,
        query: RosterListQuery,
    ) -> Result<RosterListResponse> {
        self.list_class_students_with_pagination_impl(class_id, query)
            .await
    }

    // 成绩模块
    async fn create_mark(&self, mark: RecordMarkRequest) -> Result<Mark> {
        self.create_mark_impl(mark).await
    }

    async fn get_mark_by_id(&self, mark_id: i64) -> Result<Option<Mark>> {
        self.get_mark_by_id_impl(mark_id).await
    }

    async fn list_marks_with_pagination(&self, query: MarkListQuery) -> Result<MarkListResponse> {
        self.list_marks_with_pagination_impl(query).await
    }

    async fn update_mark(&self, mark_id: i64, update: UpdateMarkRequest) -> Result<Option<Mark>> {
        self.update_mark_impl(mark_id, update).await
    }

    async fn delete_mark(&self, mark_id: i64) -> Result<bool> {
        self.delete_mark_impl(mark_id).await
    }

    // 平均分模块
    async fn get_final_average(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<FinalAverage>> {
        self.get_final_average_impl(student_id, subject_id).await
    }

    async fn list_final_averages_with_pagination(
        &self,
        query: AverageListQuery,
    ) -> Result<AverageListResponse> {
        self.list_final_averages_with_pagination_impl(query).await
    }

    // 成绩单
    async fn get_grade_sheet(&self, class_id: i64, subject_id: i64) -> Result<GradeSheetResponse> {
        self.get_grade_sheet_impl(class_id, subject_id).await
    }

    // 校历事件模块
    async fn create_event(&self, event: CreateEventRequest) -> Result<Event> {
        self.create_event_impl(event).await
    }

    async fn get_event_by_id(&self, event_id: i64) -> Result<Option<Event>> {
        self.get_event_by_id_impl(event_id).await
    }

    async fn list_events_with_pagination(
        &self,
        query: EventListQuery,
    ) -> Result<EventListResponse> {
        self.list_events_with_pagination_impl(query).await
    }

    async fn update_event(
        &self,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        self.update_event_impl(event_id, update).await
    }

    async fn delete_event(&self, event_id: i64) -> Result<bool> {
        self.delete_event_impl(event_id).await
    }

    // 课程表模块
    async fn create_timetable_slot(
        &self,
        slot: CreateTimetableSlotRequest,
    ) -> Result<TimetableSlot> {
        self.create_timetable_slot_impl(slot).await
    }

    async fn get_timetable_slot_by_id(&self, slot_id: i64) -> Result<Option<TimetableSlot>> {
        self.get_timetable_slot_by_id_impl(slot_id).await
    }

    async fn list_timetable_slots_with_pagination(
        &self,
        query: TimetableListQuery,
    ) -> Result<TimetableListResponse> {
        self.list_timetable_slots_with_pagination_impl(query).await
    }

    async fn update_timetable_slot(
        &self,
        slot_id: i64,
        update: UpdateTimetableSlotRequest,
    ) -> Result<Option<TimetableSlot>> {
        self.update_timetable_slot_impl(slot_id, update).await
    }

    async fn delete_timetable_slot(&self, slot_id: i64) -> Result<bool> {
        self.delete_timetable_slot_impl(slot_id).await
    }
}
