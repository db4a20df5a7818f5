use serde::{Deserialize, Serialize};

/// Product skins sharing one widget implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Linkstack,
    Thinkstack,
}

impl Variant {
    /// Parses a variant name as used by the RPC protocol.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linkstack" => Some(Variant::Linkstack),
            "thinkstack" => Some(Variant::Thinkstack),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Linkstack => "linkstack",
            Variant::Thinkstack => "thinkstack",
        }
    }
}

/// How bookmarks are addressed for edit and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStrategy {
    /// Generated UUID stored on the bookmark.
    StableId,
    /// Position in the stored array.
    Position,
}

/// Optional per-entry controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordances {
    pub edit: bool,
    pub delete: bool,
}

/// Everything that differs between variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub variant: Variant,
    pub storage_key: String,
    pub identifier_strategy: IdentifierStrategy,
    pub affordances: Affordances,
    pub fallback_image: String,
}

impl VariantConfig {
    pub fn linkstack() -> Self {
        Self {
            variant: Variant::Linkstack,
            storage_key: "bookmarks:linkstack".to_string(),
            identifier_strategy: IdentifierStrategy::StableId,
            affordances: Affordances { edit: true, delete: true },
            fallback_image: "../assets/linkstack-fallback.webp".to_string(),
        }
    }

    pub fn thinkstack() -> Self {
        Self {
            variant: Variant::Thinkstack,
            storage_key: "bookmarks:thinkstack".to_string(),
            identifier_strategy: IdentifierStrategy::StableId,
            affordances: Affordances { edit: false, delete: true },
            fallback_image: "../assets/thinkstack-fallback.webp".to_string(),
        }
    }

    /// Returns the preset for `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Linkstack => Self::linkstack(),
            Variant::Thinkstack => Self::thinkstack(),
        }
    }
}
