use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String, // e.g. "CSC4899"
    pub name: String,
    pub credits: i32,
    pub description: Option<String>,
    pub department: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::degree_requirements::Entity")]
    DegreeRequirements,
    #[sea_orm(has_many = "super::completed_courses::Entity")]
    CompletedCourses,
    #[sea_orm(has_many = "super::schedule_courses::Entity")]
    ScheduleCourses,
}

impl Related<super::degree_requirements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeRequirements.def()
    }
}

impl Related<super::completed_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompletedCourses.def()
    }
}

impl Related<super::schedule_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
