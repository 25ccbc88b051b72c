//! 预导入模块，方便使用

pub use super::class_schedule::{
    ActiveModel as ClassScheduleActiveModel, Entity as ClassSchedule,
    Model as ClassScheduleModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::connections::{
    ActiveModel as ConnectionActiveModel, Entity as Connections, Model as ConnectionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
