use models::requirement_type::RequirementType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ties a major or a minor to an optional course
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "degree_requirements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    pub requirement_type: RequirementType,
    pub credits_required: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::majors::Entity",
        from = "Column::MajorId",
        to = "super::majors::Column::Id",
        on_delete = "Cascade"
    )]
    Major,
    #[sea_orm(
        belongs_to = "super::minors::Entity",
        from = "Column::MinorId",
        to = "super::minors::Column::Id",
        on_delete = "Cascade"
    )]
    Minor,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::majors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Major.def()
    }
}

impl Related<super::minors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Minor.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
