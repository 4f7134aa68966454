use std::fmt;

/// Widest values the knowledge base columns accept, in characters.
pub const MAX_BRAND_NAME_LEN: usize = 50;
pub const MAX_MODEL_NAME_LEN: usize = 100;
pub const MAX_TRIM_NAME_LEN: usize = 64;
pub const MAX_MODIFICATION_NAME_LEN: usize = 100;

/// Where a knowledge base row came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnowledgeSource {
    /// Bulk seed data.
    Seed,
    /// Learned from a parse without external confirmation (fallback brand/model tokens,
    /// leftover modification text).
    AutoDetected,
    /// Trim confirmed by the CarQuery catalog.
    CarQuery,
    /// Trim confirmed by the CarAPI catalog.
    CarApi,
}

impl KnowledgeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seed => "seed_script",
            Self::AutoDetected => "auto_detected",
            Self::CarQuery => "carquery",
            Self::CarApi => "carapi",
        }
    }
}

impl fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A brand as the parser sees it.
///
/// `id` is `None` for a brand that was discovered during this parse and has not been
/// flushed to the knowledge base yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandRef {
    pub id: Option<i32>,
    pub name: String,
}

impl BrandRef {
    pub fn known(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    pub fn discovered(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A spelling that resolves to a canonical brand: either the brand's own name or one of its
/// synonyms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandAlias {
    pub alias: String,
    pub brand_id: i32,
    pub brand_name: String,
}

impl BrandAlias {
    pub fn brand(&self) -> BrandRef {
        BrandRef::known(self.brand_id, self.brand_name.clone())
    }
}
