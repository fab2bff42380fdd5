use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 学科管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级名册管理方法
    // 学生加入班级
    async fn add_student_to_class(&self, class_id: i64, student_id: i64) -> Result<ClassStudent>;
    // 学生移出班级
    async fn remove_student_from_class(&self, class_id: i64, student_id: i64) -> Result<bool>;
    // 获取名册记录
    async fn get_class_student(
        &self,
        class_id: i64,
        student_id: i64,
    ) -> Result<Option<ClassStudent>>;
    // 列出班级名册
    async fn list_class_students_with_pagination(
        &self,
        class_id: i64,
        query: RosterListQuery,
    ) -> Result<RosterListResponse>;

    /// 成绩管理方法
    //
    // 创建/更新/删除都会在同一事务内重算对应 (student, subject)
    // 的期末平均分。
    async fn create_mark(&self, mark: RecordMarkRequest) -> Result<Mark>;
    async fn get_mark_by_id(&self, mark_id: i64) -> Result<Option<Mark>>;
    async fn list_marks_with_pagination(&self, query: MarkListQuery) -> Result<MarkListResponse>;
    async fn update_mark(&self, mark_id: i64, update: UpdateMarkRequest) -> Result<Option<Mark>>;
    async fn delete_mark(&self, mark_id: i64) -> Result<bool>;

    /// 期末平均分查询方法（派生状态，只读）
    async fn get_final_average(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<FinalAverage>>;
    async fn list_final_averages_with_pagination(
        &self,
        query: AverageListQuery,
    ) -> Result<AverageListResponse>;

    /// 成绩单
    async fn get_grade_sheet(&self, class_id: i64, subject_id: i64) -> Result<GradeSheetResponse>;

    /// 校历事件管理方法
    async fn create_event(&self, event: CreateEventRequest) -> Result<Event>;
    async fn get_event_by_id(&self, event_id: i64) -> Result<Option<Event>>;
    async fn list_events_with_pagination(&self, query: EventListQuery)
    -> Result<EventListResponse>;
    async fn update_event(
        &self,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>>;
    async fn delete_event(&self, event_id: i64) -> Result<bool>;

    /// 课程表管理方法
    //
    // 创建/更新带冲突检测：同一天时间段重叠且共用班级或教师的条目
    // 会被拒绝。
    async fn create_timetable_slot(
        &self,
        slot: CreateTimetableSlotRequest,
    ) -> Result<TimetableSlot>;
    async fn get_timetable_slot_by_id(&self, slot_id: i64) -> Result<Option<TimetableSlot>>;
    async fn list_timetable_slots_with_pagination(
        &self,
        query: TimetableListQuery,
    ) -> Result<TimetableListResponse>;
    async fn update_timetable_slot(
        &self,
        slot_id: i64,
        update: UpdateTimetableSlotRequest,
    ) -> Result<Option<TimetableSlot>>;
    async fn delete_timetable_slot(&self, slot_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
