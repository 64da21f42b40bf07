use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    /// Convert the test database handle into any state type that can be
    /// constructed from it. This allows conversion to AppState without
    /// creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
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
macro_rules! test_setup_with_post_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Post),
                schema.create_table_from_entity(entity::prelude::PostCarDetails),
                schema.create_table_from_entity(entity::prelude::PostBikeDetails),
                schema.create_table_from_entity(entity::prelude::PostImage),
                schema.create_table_from_entity(entity::prelude::PostVerification)
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::Post),
                schema.create_table_from_entity(entity::prelude::PostCarDetails),
                schema.create_table_from_entity(entity::prelude::PostBikeDetails),
                schema.create_table_from_entity(entity::prelude::PostImage),
                schema.create_table_from_entity(entity::prelude::PostVerification),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
