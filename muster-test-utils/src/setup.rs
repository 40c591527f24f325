use std::sync::Arc;

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert the test state into any type that can be constructed from a
    /// database connection. This allows conversion to AppState without creating
    /// a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Unique indexes backing the vote and resolution upserts.
///
/// In production these are created by the migrations; entity-derived table
/// statements cannot express composite unique constraints, so tests apply them
/// separately.
pub fn unique_index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx-formation_vote-formation_id-user_id")
            .table(entity::prelude::FormationVote)
            .col(entity::formation_vote::Column::FormationId)
            .col(entity::formation_vote::Column::UserId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx-line_up_skill_resolution-line_up_id-skill_id")
            .table(entity::prelude::LineUpSkillResolution)
            .col(entity::line_up_skill_resolution::Column::LineUpId)
            .col(entity::line_up_skill_resolution::Column::SkillId)
            .unique()
            .to_owned(),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_muster_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::MusterUser),
                schema.create_table_from_entity(entity::prelude::General),
                schema.create_table_from_entity(entity::prelude::Skill),
                schema.create_table_from_entity(entity::prelude::Formation),
                schema.create_table_from_entity(entity::prelude::FormationSlot),
                schema.create_table_from_entity(entity::prelude::FormationVote),
                schema.create_table_from_entity(entity::prelude::LineUp),
                schema.create_table_from_entity(entity::prelude::LineUpFormation),
                schema.create_table_from_entity(entity::prelude::LineUpSkillResolution),
            ];
            setup.with_tables(stmts).await?;
            setup
                .with_indexes($crate::setup::unique_index_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
