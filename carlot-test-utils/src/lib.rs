pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestContext;

pub mod prelude {
    pub use crate::{
        constant::{TEST_CARAPI_JWT, TEST_CARAPI_SECRET, TEST_CARAPI_TOKEN, TEST_USER_AGENT},
        fixtures::catalog::factory,
        test_setup_with_knowledge_base_tables, TestBuilder, TestContext, TestError,
    };
}
