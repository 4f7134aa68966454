//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// knowledge base fixtures, and catalog HTTP endpoints. Methods can be chained together
/// and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_knowledge_base_tables: bool,

    // Database fixtures to insert, brands referenced by name
    brands: Vec<String>,
    synonyms: Vec<(String, String)>,      // (brand, synonym)
    models: Vec<(String, String)>,        // (brand, model)
    trims: Vec<(String, String)>,         // (brand, trim)
    modifications: Vec<(String, String)>, // (brand, modification)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    carquery_trims_endpoints: Vec<(String, String, Vec<String>, usize)>,
    carquery_error_endpoints: Vec<(String, String, usize, usize)>,
    carapi_login_endpoints: Vec<usize>,
    carapi_trims_endpoints: Vec<(String, String, Vec<String>, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_knowledge_base_tables: false,
            brands: Vec::new(),
            synonyms: Vec::new(),
            models: Vec::new(),
            trims: Vec::new(),
            modifications: Vec::new(),
            mock_builders: Vec::new(),
            carquery_trims_endpoints: Vec::new(),
            carquery_error_endpoints: Vec::new(),
            carapi_login_endpoints: Vec::new(),
            carapi_trims_endpoints: Vec::new(),
        }
    }

    /// Add the knowledge base tables (brand, brand_synonym, brand_model, brand_trim,
    /// brand_modification) and their per-brand unique indexes.
    pub fn with_knowledge_base_tables(mut self) -> Self {
        self.include_knowledge_base_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a brand into the database.
    ///
    /// Brands referenced by the other fixture methods are created automatically, so this is
    /// only needed for brands without any models, trims or synonyms.
    pub fn with_brand(mut self, name: impl Into<String>) -> Self {
        self.brands.push(name.into());
        self
    }

    /// Insert a synonym resolving to `brand`.
    pub fn with_synonym(mut self, brand: impl Into<String>, synonym: impl Into<String>) -> Self {
        self.synonyms.push((brand.into(), synonym.into()));
        self
    }

    pub fn with_model(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.models.push((brand.into(), model.into()));
        self
    }

    pub fn with_trim(mut self, brand: impl Into<String>, trim: impl Into<String>) -> Self {
        self.trims.push((brand.into(), trim.into()));
        self
    }

    pub fn with_modification(
        mut self,
        brand: impl Into<String>,
        modification: impl Into<String>,
    ) -> Self {
        self.modifications.push((brand.into(), modification.into()));
        self
    }

    /// Add a mock CarQuery `getTrims` endpoint for `make`/`model`.
    ///
    /// # Arguments
    /// - `make` / `model` - Query values the endpoint matches (compared lowercased)
    /// - `trims` - `model_trim` values returned
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_carquery_trims_endpoint(
        mut self,
        make: &str,
        model: &str,
        trims: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.carquery_trims_endpoints.push((
            make.to_string(),
            model.to_string(),
            trims.iter().map(|t| t.to_string()).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a mock CarQuery endpoint for `make`/`model` that fails with `status`.
    pub fn with_carquery_error_endpoint(
        mut self,
        make: &str,
        model: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.carquery_error_endpoints.push((
            make.to_string(),
            model.to_string(),
            status,
            expected_requests,
        ));
        self
    }

    /// Add the mock CarAPI login endpoint.
    pub fn with_carapi_login_endpoint(mut self, expected_requests: usize) -> Self {
        self.carapi_login_endpoints.push(expected_requests);
        self
    }

    /// Add a mock CarAPI trims endpoint for `make`/`model`.
    pub fn with_carapi_trims_endpoint(
        mut self,
        make: &str,
        model: &str,
        trims: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.carapi_trims_endpoints.push((
            make.to_string(),
            model.to_string(),
            trims.iter().map(|t| t.to_string()).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (knowledge base tables if specified, then custom tables)
    /// 2. Inserts database fixtures (brands, synonyms, models, trims, modifications)
    /// 3. Creates mock HTTP endpoints (custom endpoints, then catalog endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_knowledge_base_tables {
            setup.with_knowledge_base_tables().await?;
        }

        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for brand in self.brands {
            setup.knowledge().insert_brand(&brand).await?;
        }

        for (brand, synonym) in self.synonyms {
            setup.knowledge().insert_synonym(&brand, &synonym).await?;
        }

        for (brand, model) in self.models {
            setup.knowledge().insert_model(&brand, &model).await?;
        }

        for (brand, trim) in self.trims {
            setup.knowledge().insert_trim(&brand, &trim).await?;
        }

        for (brand, modification) in self.modifications {
            setup
                .knowledge()
                .insert_modification(&brand, &modification)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can register an earlier response for a
        // path that a shortcut also mocks
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (make, model, trims, expected) in self.carquery_trims_endpoints {
            let trims: Vec<&str> = trims.iter().map(String::as_str).collect();
            mocks.push(
                setup
                    .catalog()
                    .create_carquery_trims_endpoint(&make, &model, &trims, expected),
            );
        }

        for (make, model, status, expected) in self.carquery_error_endpoints {
            mocks.push(
                setup
                    .catalog()
                    .create_carquery_error_endpoint(&make, &model, status, expected),
            );
        }

        for expected in self.carapi_login_endpoints {
            mocks.push(setup.catalog().create_carapi_login_endpoint(expected));
        }

        for (make, model, trims, expected) in self.carapi_trims_endpoints {
            let trims: Vec<&str> = trims.iter().map(String::as_str).collect();
            mocks.push(
                setup
                    .catalog()
                    .create_carapi_trims_endpoint(&make, &model, &trims, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
