pub mod resolution;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct LineUpRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LineUpRepository<'a, C> {
    /// Creates a new instance of [`LineUpRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new line-up owned by the given user
    ///
    /// # Returns
    /// - `Ok(Model)`: The created line-up
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, user_id: i32, name: &str) -> Result<entity::line_up::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let line_up = entity::line_up::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        line_up.insert(self.db).await
    }

    /// Gets a line-up by ID
    pub async fn get(&self, line_up_id: i32) -> Result<Option<entity::line_up::Model>, DbErr> {
        entity::prelude::LineUp::find_by_id(line_up_id)
            .one(self.db)
            .await
    }

    /// Gets a user's line-ups, most recently updated first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<entity::line_up::Model>, DbErr> {
        entity::prelude::LineUp::find()
            .filter(entity::line_up::Column::UserId.eq(user_id))
            .order_by_desc(entity::line_up::Column::UpdatedAt)
            .all(self.db)
            .await
    }

    /// Renames the line-up when a name is given, and bumps `updated_at`
    /// either way
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated line-up
    /// - `Ok(None)`: No line-up with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        line_up_id: i32,
        name: Option<String>,
    ) -> Result<Option<entity::line_up::Model>, DbErr> {
        let line_up = match self.get(line_up_id).await? {
            Some(line_up) => line_up,
            None => return Ok(None),
        };

        let mut line_up_am = line_up.into_active_model();

        if let Some(name) = name {
            line_up_am.name = ActiveValue::Set(name);
        }
        line_up_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let line_up = line_up_am.update(self.db).await?;

        Ok(Some(line_up))
    }

    /// Deletes a line-up; memberships and resolutions cascade
    pub async fn delete(&self, line_up_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LineUp::delete_by_id(line_up_id)
            .exec(self.db)
            .await
    }

    /// Inserts membership rows in the given order, positions starting at 1
    pub async fn insert_members(
        &self,
        line_up_id: i32,
        formation_ids: &[i32],
    ) -> Result<Vec<entity::line_up_formation::Model>, DbErr> {
        if formation_ids.is_empty() {
            return Ok(Vec::new());
        }

        let member_ams: Vec<entity::line_up_formation::ActiveModel> = formation_ids
            .iter()
            .enumerate()
            .map(|(index, formation_id)| entity::line_up_formation::ActiveModel {
                line_up_id: ActiveValue::Set(line_up_id),
                formation_id: ActiveValue::Set(*formation_id),
                position: ActiveValue::Set(index as i32 + 1),
                ..Default::default()
            })
            .collect();

        entity::prelude::LineUpFormation::insert_many(member_ams)
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes every membership row of a line-up
    pub async fn delete_members(&self, line_up_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LineUpFormation::delete_many()
            .filter(entity::line_up_formation::Column::LineUpId.eq(line_up_id))
            .exec(self.db)
            .await
    }

    /// Gets a line-up's membership rows ordered by position
    pub async fn get_members(
        &self,
        line_up_id: i32,
    ) -> Result<Vec<entity::line_up_formation::Model>, DbErr> {
        entity::prelude::LineUpFormation::find()
            .filter(entity::line_up_formation::Column::LineUpId.eq(line_up_id))
            .order_by_asc(entity::line_up_formation::Column::Position)
            .all(self.db)
            .await
    }
}
