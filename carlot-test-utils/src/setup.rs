use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
};

use crate::error::TestError;

/// Test environment: an in-memory SQLite database and a mockito server standing in for both
/// external trim catalogs.
pub struct TestContext {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub mocks: Vec<Mock>,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server,
            db,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, used as both the CarQuery and the CarAPI URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create all knowledge base tables along with their per-brand unique indexes.
    ///
    /// Tables created from entities carry the single-column unique constraints but not the
    /// composite (name, brand_id) ones the migrations add, so those are created here.
    pub async fn with_knowledge_base_tables(&self) -> Result<(), TestError> {
        self.with_tables(knowledge_base_tables()).await?;

        for stmt in knowledge_base_indexes() {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

pub fn knowledge_base_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Brand),
        schema.create_table_from_entity(entity::prelude::BrandSynonym),
        schema.create_table_from_entity(entity::prelude::BrandModel),
        schema.create_table_from_entity(entity::prelude::BrandTrim),
        schema.create_table_from_entity(entity::prelude::BrandModification),
    ]
}

fn knowledge_base_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("unique_model_per_brand")
            .table(entity::prelude::BrandModel)
            .col(entity::brand_model::Column::Name)
            .col(entity::brand_model::Column::BrandId)
            .unique()
            .to_owned(),
        Index::create()
            .name("unique_trim_per_brand")
            .table(entity::prelude::BrandTrim)
            .col(entity::brand_trim::Column::Name)
            .col(entity::brand_trim::Column::BrandId)
            .unique()
            .to_owned(),
        Index::create()
            .name("unique_modification_per_brand")
            .table(entity::prelude::BrandModification)
            .col(entity::brand_modification::Column::Name)
            .col(entity::brand_modification::Column::BrandId)
            .unique()
            .to_owned(),
    ]
}

/// Create a [`TestContext`] with the knowledge base tables and no fixtures.
#[macro_export]
macro_rules! test_setup_with_knowledge_base_tables {
    () => {{
        async {
            let setup = TestContext::new().await?;
            setup.with_knowledge_base_tables().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
