//! CarQuery and CarAPI fixture utilities.
//!
//! Both catalogs are served by the same mockito server; their paths do not overlap.

use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a mut TestContext,
}
