use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Directed edge: `course_id` requires `prerequisite_course_id`
///
/// Both ends point at `courses`, so there is no `Related<courses::Entity>`
/// impl; join through [`Relation::Course`] or [`Relation::PrerequisiteCourse`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prerequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub prerequisite_course_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::PrerequisiteCourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    PrerequisiteCourse,
}

impl ActiveModelBehavior for ActiveModel {}
