//! User fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestSetup};

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a regular user with the given display name.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_user(&self, display_name: &str) -> Result<UserModel, TestError> {
        self.insert(display_name, false).await
    }

    /// Insert an admin user with the given display name.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_admin(&self, display_name: &str) -> Result<UserModel, TestError> {
        self.insert(display_name, true).await
    }

    async fn insert(&self, display_name: &str, is_admin: bool) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::MusterUser::insert(entity::muster_user::ActiveModel {
                display_name: ActiveValue::Set(display_name.to_string()),
                is_admin: ActiveValue::Set(is_admin),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
