use crate::entities::{
    completed_courses, courses, degree_requirements, majors, minors, prerequisites,
    schedule_courses, schedules, students,
};
use log::debug;
use models::{grade::Grade, requirement_type::RequirementType};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
    sea_query::{Expr, Func, LikeExpr, SelectStatement, SimpleExpr},
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// 1-based page selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub per_page: u64,
}

/// One page of rows plus the total row count
pub type Paged<T> = (Vec<T>, u64);

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub credits: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct RequirementFilter {
    pub search: Option<String>,
    pub requirement_type: Option<RequirementType>,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub search: Option<String>,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct CompletedCourseFilter {
    pub search: Option<String>,
    pub semester: Option<String>,
    pub grade: Option<Grade>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub search: Option<String>,
    pub semester: Option<String>,
    pub is_optimal: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrerequisiteRow {
    pub id: Uuid,
    pub course: courses::Model,
    pub prerequisite: courses::Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequirementRow {
    pub requirement: degree_requirements::Model,
    pub major: Option<majors::Model>,
    pub minor: Option<minors::Model>,
    pub course: Option<courses::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedCourseRow {
    pub record: completed_courses::Model,
    pub student: students::Model,
    pub course: courses::Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub schedule: schedules::Model,
    pub student: students::Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleCourseRow {
    pub entry: schedule_courses::Model,
    pub schedule: schedules::Model,
    pub student: students::Model,
    pub course: courses::Model,
}

/// List, search and filter views over every table
pub struct AdminService;

impl AdminService {
    pub async fn list_courses(
        db: &DatabaseConnection,
        filter: &CourseFilter,
        page: Page,
    ) -> Result<Paged<courses::Model>, DbErr> {
        fetch_page(db, courses_query(filter), page).await
    }

    pub async fn list_prerequisites(
        db: &DatabaseConnection,
        search: Option<&str>,
        page: Page,
    ) -> Result<Paged<PrerequisiteRow>, DbErr> {
        let (edges, total) = fetch_page(db, prerequisites_query(search), page).await?;

        let course_ids = edges
            .iter()
            .flat_map(|edge| [edge.course_id, edge.prerequisite_course_id])
            .collect();
        let courses = courses_by_id(db, course_ids).await?;

        let rows = edges
            .into_iter()
            .filter_map(|edge| {
                Some(PrerequisiteRow {
                    id: edge.id,
                    course: courses.get(&edge.course_id)?.clone(),
                    prerequisite: courses.get(&edge.prerequisite_course_id)?.clone(),
                })
            })
            .collect();

        Ok((rows, total))
    }

    pub async fn list_majors(
        db: &DatabaseConnection,
        search: Option<&str>,
        page: Page,
    ) -> Result<Paged<majors::Model>, DbErr> {
        fetch_page(db, majors_query(search), page).await
    }

    pub async fn list_minors(
        db: &DatabaseConnection,
        search: Option<&str>,
        page: Page,
    ) -> Result<Paged<minors::Model>, DbErr> {
        fetch_page(db, minors_query(search), page).await
    }

    pub async fn list_requirements(
        db: &DatabaseConnection,
        filter: &RequirementFilter,
        page: Page,
    ) -> Result<Paged<RequirementRow>, DbErr> {
        let (requirements, total) = fetch_page(db, requirements_query(filter), page).await?;

        let major_ids = requirements.iter().filter_map(|r| r.major_id).collect();
        let minor_ids = requirements.iter().filter_map(|r| r.minor_id).collect();
        let course_ids = requirements.iter().filter_map(|r| r.course_id).collect();

        let majors = load_by_ids::<majors::Entity, _>(db, majors::Column::Id, major_ids, |m| m.id)
            .await?;
        let minors = load_by_ids::<minors::Entity, _>(db, minors::Column::Id, minor_ids, |m| m.id)
            .await?;
        let courses = courses_by_id(db, course_ids).await?;

        let rows = requirements
            .into_iter()
            .map(|requirement| RequirementRow {
                major: requirement.major_id.and_then(|id| majors.get(&id).cloned()),
                minor: requirement.minor_id.and_then(|id| minors.get(&id).cloned()),
                course: requirement.course_id.and_then(|id| courses.get(&id).cloned()),
                requirement,
            })
            .collect();

        Ok((rows, total))
    }

    pub async fn list_students(
        db: &DatabaseConnection,
        filter: &StudentFilter,
        page: Page,
    ) -> Result<Paged<students::Model>, DbErr> {
        fetch_page(db, students_query(filter), page).await
    }

    pub async fn list_completed_courses(
        db: &DatabaseConnection,
        filter: &CompletedCourseFilter,
        page: Page,
    ) -> Result<Paged<CompletedCourseRow>, DbErr> {
        let (records, total) = fetch_page(db, completed_courses_query(filter), page).await?;

        let student_ids = records.iter().map(|r| r.student_id).collect();
        let course_ids = records.iter().map(|r| r.course_id).collect();
        let students = students_by_id(db, student_ids).await?;
        let courses = courses_by_id(db, course_ids).await?;

        let rows = records
            .into_iter()
            .filter_map(|record| {
                Some(CompletedCourseRow {
                    student: students.get(&record.student_id)?.clone(),
                    course: courses.get(&record.course_id)?.clone(),
                    record,
                })
            })
            .collect();

        Ok((rows, total))
    }

    pub async fn list_schedules(
        db: &DatabaseConnection,
        filter: &ScheduleFilter,
        page: Page,
    ) -> Result<Paged<ScheduleRow>, DbErr> {
        let (schedules, total) = fetch_page(db, schedules_query(filter), page).await?;

        let student_ids = schedules.iter().map(|s| s.student_id).collect();
        let students = students_by_id(db, student_ids).await?;

        let rows = schedules
            .into_iter()
            .filter_map(|schedule| {
                Some(ScheduleRow {
                    student: students.get(&schedule.student_id)?.clone(),
                    schedule,
                })
            })
            .collect();

        Ok((rows, total))
    }

    pub async fn list_schedule_courses(
        db: &DatabaseConnection,
        search: Option<&str>,
        page: Page,
    ) -> Result<Paged<ScheduleCourseRow>, DbErr> {
        let (entries, total) = fetch_page(db, schedule_courses_query(search), page).await?;

        let schedule_ids = entries.iter().map(|e| e.schedule_id).collect();
        let course_ids = entries.iter().map(|e| e.course_id).collect();
        let schedules = load_by_ids::<schedules::Entity, _>(
            db,
            schedules::Column::Id,
            schedule_ids,
            |s| s.id,
        )
        .await?;
        let student_ids = schedules.values().map(|s| s.student_id).collect();
        let students = students_by_id(db, student_ids).await?;
        let courses = courses_by_id(db, course_ids).await?;

        let rows = entries
            .into_iter()
            .filter_map(|entry| {
                let schedule = schedules.get(&entry.schedule_id)?.clone();
                Some(ScheduleCourseRow {
                    student: students.get(&schedule.student_id)?.clone(),
                    course: courses.get(&entry.course_id)?.clone(),
                    schedule,
                    entry,
                })
            })
            .collect();

        Ok((rows, total))
    }
}

const LIKE_ESCAPE: char = '!';

/// Lower-cased `%search%` with LIKE wildcards in the text escaped
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.trim().to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive match of `col` against a [`like_pattern`]
fn matches_pattern<C: ColumnTrait>(col: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((col.entity_name(), col))))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Non-blank search text
fn search_term(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}

/// Ids of courses whose code matches the pattern
fn course_ids_matching(pattern: &str) -> SelectStatement {
    courses::Entity::find()
        .select_only()
        .column(courses::Column::Id)
        .filter(matches_pattern(courses::Column::Code, pattern))
        .into_query()
}

/// Ids of students whose university id matches the pattern
fn student_ids_matching(pattern: &str) -> SelectStatement {
    students::Entity::find()
        .select_only()
        .column(students::Column::Id)
        .filter(matches_pattern(students::Column::StudentId, pattern))
        .into_query()
}

fn courses_query(filter: &CourseFilter) -> Select<courses::Entity> {
    let mut condition = Condition::all();

    if let Some(search) = search_term(filter.search.as_deref()) {
        let pattern = like_pattern(search);
        condition = condition.add(
            Condition::any()
                .add(matches_pattern(courses::Column::Code, &pattern))
                .add(matches_pattern(courses::Column::Name, &pattern)),
        );
    }

    if let Some(department) = &filter.department {
        condition = condition.add(courses::Column::Department.eq(department.as_str()));
    }

    if let Some(credits) = filter.credits {
        condition = condition.add(courses::Column::Credits.eq(credits));
    }

    courses::Entity::find()
        .filter(condition)
        .order_by_asc(courses::Column::Code)
}

fn prerequisites_query(search: Option<&str>) -> Select<prerequisites::Entity> {
    let mut query = prerequisites::Entity::find();

    if let Some(search) = search_term(search) {
        let pattern = like_pattern(search);
        query = query.filter(
            Condition::any()
                .add(prerequisites::Column::CourseId.in_subquery(course_ids_matching(&pattern)))
                .add(
                    prerequisites::Column::PrerequisiteCourseId
                        .in_subquery(course_ids_matching(&pattern)),
                ),
        );
    }

    query.order_by_asc(prerequisites::Column::Id)
}

fn majors_query(search: Option<&str>) -> Select<majors::Entity> {
    let mut query = majors::Entity::find();

    if let Some(search) = search_term(search) {
        let pattern = like_pattern(search);
        query = query.filter(
            Condition::any()
                .add(matches_pattern(majors::Column::Name, &pattern))
                .add(matches_pattern(majors::Column::Code, &pattern)),
        );
    }

    query.order_by_asc(majors::Column::Name)
}

fn minors_query(search: Option<&str>) -> Select<minors::Entity> {
    let mut query = minors::Entity::find();

    if let Some(search) = search_term(search) {
        let pattern = like_pattern(search);
        query = query.filter(
            Condition::any()
                .add(matches_pattern(minors::Column::Name, &pattern))
                .add(matches_pattern(minors::Column::Code, &pattern)),
        );
    }

    query.order_by_asc(minors::Column::Name)
}

fn requirements_query(filter: &RequirementFilter) -> Select<degree_requirements::Entity> {
    let mut condition = Condition::all();

    // Search matches the name of the owning major or minor
    if let Some(search) = search_term(filter.search.as_deref()) {
        let pattern = like_pattern(search);
        let major_ids = majors::Entity::find()
            .select_only()
            .column(majors::Column::Id)
            .filter(matches_pattern(majors::Column::Name, &pattern))
            .into_query();
        let minor_ids = minors::Entity::find()
            .select_only()
            .column(minors::Column::Id)
            .filter(matches_pattern(minors::Column::Name, &pattern))
            .into_query();

        condition = condition.add(
            Condition::any()
                .add(degree_requirements::Column::MajorId.in_subquery(major_ids))
                .add(degree_requirements::Column::MinorId.in_subquery(minor_ids)),
        );
    }

    if let Some(requirement_type) = filter.requirement_type {
        condition = condition.add(degree_requirements::Column::RequirementType.eq(requirement_type));
    }

    if let Some(major_id) = filter.major_id {
        condition = condition.add(degree_requirements::Column::MajorId.eq(major_id));
    }

    if let Some(minor_id) = filter.minor_id {
        condition = condition.add(degree_requirements::Column::MinorId.eq(minor_id));
    }

    degree_requirements::Entity::find()
        .filter(condition)
        .order_by_asc(degree_requirements::Column::RequirementType)
        .order_by_asc(degree_requirements::Column::Id)
}

fn students_query(filter: &StudentFilter) -> Select<students::Entity> {
    let mut condition = Condition::all();

    if let Some(search) = search_term(filter.search.as_deref()) {
        let pattern = like_pattern(search);
        condition = condition.add(
            Condition::any()
                .add(matches_pattern(students::Column::StudentId, &pattern))
                .add(matches_pattern(students::Column::FirstName, &pattern))
                .add(matches_pattern(students::Column::LastName, &pattern))
                .add(matches_pattern(students::Column::Email, &pattern)),
        );
    }

    if let Some(major_id) = filter.major_id {
        condition = condition.add(students::Column::MajorId.eq(major_id));
    }

    if let Some(minor_id) = filter.minor_id {
        condition = condition.add(students::Column::MinorId.eq(minor_id));
    }

    students::Entity::find()
        .filter(condition)
        .order_by_asc(students::Column::StudentId)
}

fn completed_courses_query(filter: &CompletedCourseFilter) -> Select<completed_courses::Entity> {
    let mut condition = Condition::all();

    if let Some(search) = search_term(filter.search.as_deref()) {
        let pattern = like_pattern(search);
        condition = condition.add(
            Condition::any()
                .add(completed_courses::Column::StudentId.in_subquery(student_ids_matching(&pattern)))
                .add(completed_courses::Column::CourseId.in_subquery(course_ids_matching(&pattern))),
        );
    }

    if let Some(semester) = &filter.semester {
        condition = condition.add(completed_courses::Column::Semester.eq(semester.as_str()));
    }

    if let Some(grade) = filter.grade {
        condition = condition.add(completed_courses::Column::Grade.eq(grade));
    }

    completed_courses::Entity::find()
        .filter(condition)
        .order_by_desc(completed_courses::Column::DateCompleted)
        .order_by_asc(completed_courses::Column::Id)
}

fn schedules_query(filter: &ScheduleFilter) -> Select<schedules::Entity> {
    let mut condition = Condition::all();

    if let Some(search) = search_term(filter.search.as_deref()) {
        let pattern = like_pattern(search);
        condition = condition.add(
            Condition::any()
                .add(schedules::Column::StudentId.in_subquery(student_ids_matching(&pattern)))
                .add(matches_pattern(schedules::Column::Semester, &pattern)),
        );
    }

    if let Some(semester) = &filter.semester {
        condition = condition.add(schedules::Column::Semester.eq(semester.as_str()));
    }

    if let Some(is_optimal) = filter.is_optimal {
        condition = condition.add(schedules::Column::IsOptimal.eq(is_optimal));
    }

    schedules::Entity::find()
        .filter(condition)
        .order_by_desc(schedules::Column::CreatedAt)
}

fn schedule_courses_query(search: Option<&str>) -> Select<schedule_courses::Entity> {
    let mut query = schedule_courses::Entity::find();

    if let Some(search) = search_term(search) {
        let pattern = like_pattern(search);
        let schedule_ids = schedules::Entity::find()
            .select_only()
            .column(schedules::Column::Id)
            .filter(schedules::Column::StudentId.in_subquery(student_ids_matching(&pattern)))
            .into_query();

        query = query.filter(
            Condition::any()
                .add(schedule_courses::Column::ScheduleId.in_subquery(schedule_ids))
                .add(schedule_courses::Column::CourseId.in_subquery(course_ids_matching(&pattern))),
        );
    }

    query.order_by_asc(schedule_courses::Column::ScheduleId)
}

async fn fetch_page<E>(
    db: &DatabaseConnection,
    query: Select<E>,
    page: Page,
) -> Result<Paged<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    debug!(
        "Admin query (page {}, {} per page): {}",
        page.page,
        page.per_page,
        query.build(db.get_database_backend())
    );

    let paginator = query.paginate(db, page.per_page.max(1));
    let total_items = paginator.num_items().await?;
    // SeaORM uses 0-based pages
    let items = paginator.fetch_page(page.page.saturating_sub(1)).await?;

    Ok((items, total_items))
}

/// Batch fetches rows by primary key into a lookup map
async fn load_by_ids<E, F>(
    db: &DatabaseConnection,
    id_column: E::Column,
    ids: HashSet<Uuid>,
    key: F,
) -> Result<HashMap<Uuid, E::Model>, DbErr>
where
    E: EntityTrait,
    F: Fn(&E::Model) -> Uuid,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(E::find()
        .filter(id_column.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|model| (key(&model), model))
        .collect())
}

async fn courses_by_id(
    db: &DatabaseConnection,
    ids: HashSet<Uuid>,
) -> Result<HashMap<Uuid, courses::Model>, DbErr> {
    load_by_ids::<courses::Entity, _>(db, courses::Column::Id, ids, |c| c.id).await
}

async fn students_by_id(
    db: &DatabaseConnection,
    ids: HashSet<Uuid>,
) -> Result<HashMap<Uuid, students::Model>, DbErr> {
    load_by_ids::<students::Entity, _>(db, students::Column::Id, ids, |s| s.id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;

    fn sql<E: EntityTrait>(query: Select<E>) -> String {
        query.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_courses_query_applies_search_and_filters() {
        let filter = CourseFilter {
            search: Some(" CSC3 ".to_string()),
            department: Some("Computer Science".to_string()),
            credits: Some(4),
        };
        let sql = sql(courses_query(&filter));

        assert!(sql.contains(r#"LOWER("courses"."code") LIKE '%csc3%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("courses"."name") LIKE '%csc3%'"#), "{sql}");
        assert!(sql.contains("ESCAPE '!'"), "{sql}");
        assert!(sql.contains(r#""courses"."department" = 'Computer Science'"#), "{sql}");
        assert!(sql.contains(r#""courses"."credits" = 4"#), "{sql}");
        assert!(sql.ends_with(r#"ORDER BY "courses"."code" ASC"#), "{sql}");
    }

    #[test]
    fn test_lower_case_search_matches_title_case_names() {
        let sql = sql(courses_query(&CourseFilter {
            search: Some("data structures".to_string()),
            ..Default::default()
        }));

        assert!(
            sql.contains(r#"LOWER("courses"."name") LIKE '%data structures%'"#),
            "{sql}"
        );
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern(" CSC "), "%csc%");
        assert_eq!(like_pattern("100%"), "%100!%%");
        assert_eq!(like_pattern("a_b!"), "%a!_b!!%");
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let sql = sql(courses_query(&CourseFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        }));

        assert!(!sql.contains("LIKE"), "{sql}");
    }

    #[test]
    fn test_completed_courses_search_uses_related_ids() {
        let filter = CompletedCourseFilter {
            search: Some("TEST001".to_string()),
            semester: Some("Fall 2025".to_string()),
            grade: Some(Grade::NoPass),
        };
        let sql = sql(completed_courses_query(&filter));

        assert!(sql.contains(r#"LOWER("students"."student_id") LIKE '%test001%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("courses"."code") LIKE '%test001%'"#), "{sql}");
        assert!(sql.contains(r#""completed_courses"."semester" = 'Fall 2025'"#), "{sql}");
        assert!(sql.contains(r#""completed_courses"."grade" = 'NP'"#), "{sql}");
    }

    #[test]
    fn test_requirements_filter_by_type() {
        let filter = RequirementFilter {
            requirement_type: Some(RequirementType::OptionGroup),
            ..Default::default()
        };
        let sql = sql(requirements_query(&filter));

        assert!(
            sql.contains(r#""degree_requirements"."requirement_type" = 'OPTION'"#),
            "{sql}"
        );
    }

    #[test]
    fn test_schedules_filter_by_optimality() {
        let filter = ScheduleFilter {
            is_optimal: Some(true),
            ..Default::default()
        };
        let sql = sql(schedules_query(&filter));

        assert!(sql.contains(r#""schedules"."is_optimal" = TRUE"#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "schedules"."created_at" DESC"#), "{sql}");
    }

    #[test]
    fn test_schedule_courses_search_reaches_students() {
        let sql = sql(schedule_courses_query(Some("TEST")));

        assert!(sql.contains(r#"LOWER("students"."student_id") LIKE '%test%'"#), "{sql}");
        assert!(sql.contains(r#""schedule_courses"."schedule_id" IN (SELECT"#), "{sql}");
    }
}
