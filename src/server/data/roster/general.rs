use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

pub struct GeneralRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GeneralRepository<'a, C> {
    /// Creates a new instance of [`GeneralRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new general
    ///
    /// # Returns
    /// - `Ok(Model)`: The created general
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, name: &str, cost: i32) -> Result<entity::general::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let general = entity::general::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            cost: ActiveValue::Set(cost),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        general.insert(self.db).await
    }

    /// Gets a general by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The general
    /// - `Ok(None)`: No general with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get(&self, general_id: i32) -> Result<Option<entity::general::Model>, DbErr> {
        entity::prelude::General::find_by_id(general_id)
            .one(self.db)
            .await
    }

    /// Gets the full rows for the requested IDs. Unknown IDs are simply
    /// absent from the result.
    pub async fn get_many(
        &self,
        general_ids: &[i32],
    ) -> Result<Vec<entity::general::Model>, DbErr> {
        entity::prelude::General::find()
            .filter(entity::general::Column::Id.is_in(general_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets the deployment cost per general for the requested IDs. Unknown
    /// IDs are simply absent from the map.
    pub async fn get_cost_map(&self, general_ids: &[i32]) -> Result<HashMap<i32, i32>, DbErr> {
        let costs: Vec<(i32, i32)> = entity::prelude::General::find()
            .select_only()
            .column(entity::general::Column::Id)
            .column(entity::general::Column::Cost)
            .filter(entity::general::Column::Id.is_in(general_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(costs.into_iter().collect())
    }

    /// Gets the display name per general for the requested IDs
    pub async fn get_name_map(&self, general_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        let names: Vec<(i32, String)> = entity::prelude::General::find()
            .select_only()
            .column(entity::general::Column::Id)
            .column(entity::general::Column::Name)
            .filter(entity::general::Column::Id.is_in(general_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(names.into_iter().collect())
    }
}
