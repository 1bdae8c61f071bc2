//! Bridging between generated values and associated external types.

use super::element_type::attr_type_map;
use super::kind::ElementKind;
use crate::error::{GenerateError, Result};
use crate::imports::ImportSet;
use crate::spec::{AssociatedExternalType, ElementType};
use serde::Serialize;

/// An associated external type as seen by the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssocExtType(AssociatedExternalType);

impl AssocExtType {
    pub fn new(spec: &AssociatedExternalType) -> Self {
        AssocExtType(spec.clone())
    }

    /// The type as declared, e.g. `*api.Widget`.
    pub fn type_name(&self) -> &str {
        &self.0.type_name
    }

    /// The type without a leading pointer, e.g. `api.Widget`.
    pub fn type_reference(&self) -> &str {
        self.0.type_name.strip_prefix('*').unwrap_or(&self.0.type_name)
    }

    /// `*api.Widget` → `ApiWidget`; used to name the To/From methods.
    pub fn to_pascal_case(&self) -> String {
        self.type_reference()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        if let Some(import) = &self.0.import {
            imports.add(import.clone());
        }
        imports
    }

    pub(crate) fn context(&self) -> AssocContext {
        AssocContext {
            type_name: self.type_name().to_string(),
            type_reference: self.type_reference().to_string(),
            pascal: self.to_pascal_case(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AssocContext {
    pub type_name: String,
    pub type_reference: String,
    pub pascal: String,
}

/// How one field moves between the generated value and the external type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToFromConversion {
    /// A built-in framework accessor, e.g. `ValueInt32Pointer`.
    Default(&'static str),
    /// `ElementsAs`/`As` and `{List,Map,Set,Object}ValueFrom` with the element type expression.
    Composite {
        accessor: &'static str,
        element_type: String,
    },
    /// Delegate to the bridging functions generated for the association.
    Associated(AssocExtType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    To,
    From,
}

impl ToFromConversion {
    /// Conversion used by a kind without an association.
    pub(crate) fn for_kind(
        kind: ElementKind,
        direction: Direction,
        element_type: Option<String>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let accessor = match direction {
            Direction::To => traits.to,
            Direction::From => traits.from,
        };
        let accessor = accessor.ok_or_else(|| {
            GenerateError::Unimplemented(format!("{} type", traits.selector.replace('_', " ")))
        })?;
        Ok(match element_type {
            Some(element_type) => ToFromConversion::Composite { accessor, element_type },
            None => ToFromConversion::Default(accessor),
        })
    }

    /// Conversion for a collection element type or object attribute type.
    pub(crate) fn for_element_type(
        element_type: &ElementType,
        direction: Direction,
    ) -> Result<Self> {
        let inner = match element_type {
            ElementType::List(inner) | ElementType::Map(inner) | ElementType::Set(inner) => {
                Some(inner.schema_type())
            }
            ElementType::Object(attribute_types) => Some(attr_type_map(attribute_types, "types")),
            _ => None,
        };
        Self::for_kind(element_type.kind(), direction, inner)
    }

    pub(crate) fn context(&self) -> ConversionContext {
        match self {
            ToFromConversion::Default(accessor) => ConversionContext::Default { accessor },
            ToFromConversion::Composite { accessor, element_type } => ConversionContext::Composite {
                accessor,
                element_type: element_type.clone(),
            },
            ToFromConversion::Associated(assoc) => ConversionContext::Associated {
                assoc: assoc.context(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ConversionContext {
    Default {
        accessor: &'static str,
    },
    Composite {
        accessor: &'static str,
        element_type: String,
    },
    Associated {
        assoc: AssocContext,
    },
}
