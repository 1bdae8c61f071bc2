//! Named Go templates for wrapper types and bridging functions.
//!
//! The built-in set is compiled into the crate and parsed once per process.
//! A [`Templates`] value built from user overrides starts from the same
//! sources and replaces only the names it is given.

use crate::error::{GenerateError, Result};
use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use super::conversion::{AssocContext, ConversionContext};

pub const TYPE: &str = "type";
pub const VALUE: &str = "value";
pub const OBJECT_TYPE: &str = "object_type";
pub const OBJECT_VALUE: &str = "object_value";
pub const TO_FROM_PRIMITIVE: &str = "to_from_primitive";
pub const TO_FROM_COLLECTION: &str = "to_from_collection";
pub const TO_FROM_OBJECT: &str = "to_from_object";

const BUILTIN_SOURCES: [(&str, &str); 7] = [
    (TYPE, include_str!("../../templates/type.go.j2")),
    (VALUE, include_str!("../../templates/value.go.j2")),
    (OBJECT_TYPE, include_str!("../../templates/object_type.go.j2")),
    (OBJECT_VALUE, include_str!("../../templates/object_value.go.j2")),
    (TO_FROM_PRIMITIVE, include_str!("../../templates/to_from_primitive.go.j2")),
    (TO_FROM_COLLECTION, include_str!("../../templates/to_from_collection.go.j2")),
    (TO_FROM_OBJECT, include_str!("../../templates/to_from_object.go.j2")),
];

static BUILTIN: Lazy<Result<Templates>> = Lazy::new(|| Templates::from_sources(&BTreeMap::new()));

/// A parsed, read-only set of the named templates.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// The built-in templates.
    pub fn builtin() -> Result<&'static Templates> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Built-in templates with some names replaced by caller-supplied sources.
    ///
    /// Unknown names and sources that fail to parse are rejected.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Templates> {
        if let Some(unknown) = overrides
            .keys()
            .find(|name| !BUILTIN_SOURCES.iter().any(|(builtin, _)| builtin == name))
        {
            return Err(GenerateError::render(unknown, "no built-in template with this name"));
        }
        Templates::from_sources(overrides)
    }

    fn from_sources(overrides: &BTreeMap<String, String>) -> Result<Templates> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);

        for (name, builtin) in BUILTIN_SOURCES {
            let source = overrides.get(name).map(String::as_str).unwrap_or(builtin);
            env.add_template_owned(name, source.to_string())
                .map_err(|e| GenerateError::render(name, e))?;
        }
        Ok(Templates { env })
    }

    /// Render one named template with the given context.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| GenerateError::render(name, e))?;
        template.render(ctx).map_err(|e| GenerateError::render(name, e))
    }
}

/// Template data for `type` and `value`
#[derive(Debug, Serialize)]
pub(crate) struct WrapperContext<'a> {
    /// Pascal case element name
    pub name: &'a str,
    /// Framework stem, e.g. `Int32` or `List`
    pub stem: &'a str,
    /// Element type of collection kinds
    pub elem_type: Option<String>,
}

/// One attribute of a generated object type
#[derive(Debug, Serialize)]
pub(crate) struct ObjectAttributeContext {
    /// Original attribute key
    pub name: String,
    /// Pascal case struct field
    pub field: String,
    /// Camel case local variable
    pub var: String,
    pub attr_type: String,
    pub attr_value: String,
}

/// Template data for `object_type` and `object_value`
#[derive(Debug, Serialize)]
pub(crate) struct ObjectContext<'a> {
    pub name: &'a str,
    pub attributes: &'a [ObjectAttributeContext],
}

/// Template data for `to_from_primitive` and `to_from_collection`
#[derive(Debug, Serialize)]
pub(crate) struct ToFromContext<'a> {
    pub name: &'a str,
    pub stem: &'a str,
    pub assoc: AssocContext,
    pub to: Option<&'static str>,
    pub from: Option<&'static str>,
    pub go_type: Option<&'static str>,
    pub elem_type: Option<String>,
}

/// One field of a composite bridging function
#[derive(Debug, Serialize)]
pub(crate) struct ToFromFieldContext {
    pub field: String,
    pub var: String,
    pub to: ConversionContext,
    pub from: ConversionContext,
}

/// Template data for `to_from_object`
#[derive(Debug, Serialize)]
pub(crate) struct ToFromObjectContext<'a> {
    pub name: &'a str,
    pub assoc: AssocContext,
    pub fields: Vec<ToFromFieldContext>,
}
