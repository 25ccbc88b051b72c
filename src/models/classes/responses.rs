use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Class;
use crate::models::users::entities::Teacher;

// 搜索结果：教师资料与课程信息合并为一条记录
//
// `id` 是教师 ID，客户端据此向 /connections 提交 user_id。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/class.ts")]
pub struct TeacherClass {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub class_id: i64,
    pub subject: String,
    pub cost: f64,
    pub user_id: i64,
}

impl TeacherClass {
    pub fn new(teacher: Teacher, class: Class) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            avatar: teacher.avatar,
            whatsapp: teacher.whatsapp,
            bio: teacher.bio,
            class_id: class.id,
            subject: class.subject,
            cost: class.cost,
            user_id: class.user_id,
        }
    }
}
