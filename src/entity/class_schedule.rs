//! 课程时间表实体
//!
//! `from` / `to` 以距午夜的分钟数存储，构成半开区间 `[from, to)`。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "class_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub week_day: i32,
    #[sea_orm(column_name = "from")]
    pub from_minute: i32,
    #[sea_orm(column_name = "to")]
    pub to_minute: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_schedule_window(self) -> crate::models::classes::entities::ScheduleWindow {
        use crate::models::classes::entities::ScheduleWindow;

        ScheduleWindow {
            id: self.id,
            class_id: self.class_id,
            week_day: self.week_day,
            from_minute: self.from_minute,
            to_minute: self.to_minute,
        }
    }
}
