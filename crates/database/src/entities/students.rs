use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub student_id: String, // university-issued, e.g. "TEST001"
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub major_id: Option<Uuid>,
    pub minor_id: Option<Uuid>,
    pub expected_graduation: Option<Date>,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::majors::Entity",
        from = "Column::MajorId",
        to = "super::majors::Column::Id",
        on_delete = "SetNull"
    )]
    Major,
    #[sea_orm(
        belongs_to = "super::minors::Entity",
        from = "Column::MinorId",
        to = "super::minors::Column::Id",
        on_delete = "SetNull"
    )]
    Minor,
    #[sea_orm(has_many = "super::completed_courses::Entity")]
    CompletedCourses,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
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

impl Related<super::completed_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompletedCourses.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
