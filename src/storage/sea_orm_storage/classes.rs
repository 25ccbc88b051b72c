//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::class_schedule::{
    ActiveModel as ScheduleActiveModel, Column as ScheduleColumn, Entity as ClassSchedule,
};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{ProffyError, Result};
use crate::models::classes::{
    entities::ScheduleWindow,
    requests::{AvailabilityQuery, CreateClassRequest, ScheduleItem, validate_week_day},
    responses::TeacherClass,
};
use crate::utils::time::{from_minutes, to_end_minutes, to_minutes};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 按星期、科目、时间查找有空的教师
    ///
    /// 时段判断为半开区间 `from <= t < to`；时间表以子查询（半连接）过滤，
    /// 同一课程有多个时段命中时也只返回一条记录。
    pub async fn find_teachers_impl(&self, query: AvailabilityQuery) -> Result<Vec<TeacherClass>> {
        debug!(
            "Searching classes: week_day={}, subject={}, time={}",
            query.week_day,
            query.subject,
            from_minutes(query.minute)
        );

        let covering_windows = Query::select()
            .column(ScheduleColumn::ClassId)
            .from(ClassSchedule)
            .and_where(ScheduleColumn::WeekDay.eq(query.week_day))
            .and_where(ScheduleColumn::FromMinute.lte(query.minute))
            .and_where(ScheduleColumn::ToMinute.gt(query.minute))
            .to_owned();

        let rows = Classes::find()
            .filter(Column::Subject.eq(query.subject))
            .filter(Column::Id.in_subquery(covering_windows))
            .find_also_related(Users)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ProffyError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(class, teacher)| {
                teacher.map(|t| TeacherClass::new(t.into_teacher(), class.into_class()))
            })
            .collect())
    }

    /// 注册教师、课程及时间表
    ///
    /// 三类记录在同一事务中写入，任一步失败时事务随 `txn` 被丢弃而回滚。
    pub async fn register_class_impl(&self, req: CreateClassRequest) -> Result<i64> {
        if req.schedule.is_empty() {
            return Err(ProffyError::registration_failed(
                "schedule must contain at least one entry",
            ));
        }

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ProffyError::registration_failed(format!("开启事务失败: {e}")))?;

        let teacher = UserActiveModel {
            name: Set(req.name),
            avatar: Set(req.avatar),
            whatsapp: Set(req.whatsapp),
            bio: Set(req.bio),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ProffyError::registration_failed(format!("创建教师失败: {e}")))?;

        let class = ActiveModel {
            subject: Set(req.subject),
            cost: Set(req.cost),
            user_id: Set(teacher.id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ProffyError::registration_failed(format!("创建课程失败: {e}")))?;

        for item in &req.schedule {
            insert_schedule_window(&txn, class.id, item).await?;
        }

        txn.commit()
            .await
            .map_err(|e| ProffyError::registration_failed(format!("提交事务失败: {e}")))?;

        Ok(teacher.id)
    }
}

/// 校验并写入单个时段
async fn insert_schedule_window(
    txn: &DatabaseTransaction,
    class_id: i64,
    item: &ScheduleItem,
) -> Result<ScheduleWindow> {
    let week_day = validate_week_day(item.week_day)
        .map_err(|e| ProffyError::registration_failed(e.message().to_string()))?;
    let from_minute = to_minutes(&item.from)
        .map_err(|e| ProffyError::registration_failed(e.message().to_string()))?;
    let to_minute = to_end_minutes(&item.to)
        .map_err(|e| ProffyError::registration_failed(e.message().to_string()))?;

    if from_minute >= to_minute {
        return Err(ProffyError::registration_failed(format!(
            "schedule window {}-{} is empty",
            item.from, item.to
        )));
    }

    let window = ScheduleActiveModel {
        class_id: Set(class_id),
        week_day: Set(week_day),
        from_minute: Set(from_minute),
        to_minute: Set(to_minute),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| ProffyError::registration_failed(format!("创建时间表失败: {e}")))?
    .into_schedule_window();

    debug!(
        "Class {} available on day {} from {} to {}",
        class_id,
        window.week_day,
        from_minutes(window.from_minute),
        from_minutes(window.to_minute)
    );

    Ok(window)
}
