//! Ordered, de-duplicated import declarations.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

pub const CONTEXT_IMPORT: &str = "context";
pub const FMT_IMPORT: &str = "fmt";
pub const MATH_BIG_IMPORT: &str = "math/big";
pub const TYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types";
pub const BASETYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/types/basetypes";
pub const ATTR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/attr";
pub const DIAG_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/diag";
pub const TFTYPES_IMPORT: &str = "github.com/hashicorp/terraform-plugin-go/tftypes";
pub const VALIDATOR_IMPORT: &str = "github.com/hashicorp/terraform-plugin-framework/schema/validator";
pub const PLAN_MODIFIER_IMPORT: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";

/// A single import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Import {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Import {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Import {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{alias} {:?}", self.path),
            None => write!(f, "{:?}", self.path),
        }
    }
}

/// Import declarations keyed by path.
///
/// The first declaration of a path wins (including its alias) and keeps its
/// position; later duplicates are ignored. Empty paths are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    entries: IndexMap<String, Import>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, import: Import) {
        if import.path.is_empty() || self.entries.contains_key(&import.path) {
            return;
        }
        self.entries.insert(import.path.clone(), import);
    }

    pub fn add_path(&mut self, path: &str) {
        self.add(Import::new(path));
    }

    /// Append the paths of `other` that have not been seen yet, in `other`'s order.
    pub fn merge(&mut self, other: &ImportSet) {
        for import in other.entries.values() {
            self.add(import.clone());
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.entries.values()
    }

    /// The de-duplicated declarations in insertion order.
    pub fn all(&self) -> Vec<Import> {
        self.entries.values().cloned().collect()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl Extend<Import> for ImportSet {
    fn extend<T: IntoIterator<Item = Import>>(&mut self, iter: T) {
        for import in iter {
            self.add(import);
        }
    }
}

impl FromIterator<Import> for ImportSet {
    fn from_iter<T: IntoIterator<Item = Import>>(iter: T) -> Self {
        let mut set = ImportSet::new();
        set.extend(iter);
        set
    }
}

impl Serialize for ImportSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

/// Renders a Go import block. An empty set renders nothing.
impl fmt::Display for ImportSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }
        writeln!(f, "import (")?;
        for import in self.entries.values() {
            writeln!(f, "\t{import}")?;
        }
        write!(f, ")")
    }
}

/// Imports needed by the wrapper types generated for an associated external type.
///
/// `types` is part of the set even when an explicit custom type replaced it in
/// the schema; the bridging functions build framework values with it.
pub fn associated_external_type_imports() -> ImportSet {
    [
        TYPES_IMPORT,
        FMT_IMPORT,
        DIAG_IMPORT,
        ATTR_IMPORT,
        TFTYPES_IMPORT,
        BASETYPES_IMPORT,
    ]
    .into_iter()
    .map(Import::new)
    .collect()
}
