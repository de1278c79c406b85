use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A generated semester schedule
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub semester: String,
    pub created_at: DateTime,
    pub is_optimal: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(has_many = "super::schedule_courses::Entity")]
    ScheduleCourses,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::schedule_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleCourses.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::schedule_courses::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::schedule_courses::Relation::Schedule.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
