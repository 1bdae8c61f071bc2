use super::Decorator;
use crate::error::{GenerateError, Result};
use crate::generator::ElementKind;
use crate::identifier::quote;
use crate::imports::{Import, ImportSet};
use crate::spec::{DefaultValue, StaticDefault};

const DEFAULT_PACKAGE_ROOT: &str = "github.com/hashicorp/terraform-plugin-framework/resource/schema";

/// Static or custom default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultDecorator(Option<DefaultValue>);

impl DefaultDecorator {
    /// A static value must have the type of `kind`; custom expressions are not checked.
    pub fn new(kind: ElementKind, value: Option<DefaultValue>) -> Result<Self> {
        if let Some(static_value) = value.as_ref().and_then(|v| v.static_value.as_ref()) {
            let value_kind = static_kind(static_value);
            if value_kind != kind {
                return Err(GenerateError::MismatchedDefault {
                    element: kind.traits().attribute_label,
                    value: value_kind.traits().selector,
                });
            }
        }
        Ok(DefaultDecorator(value))
    }

    /// True when either a static or a custom default was given.
    pub fn is_set(&self) -> bool {
        self.0
            .as_ref()
            .is_some_and(|d| d.static_value.is_some() || d.custom.is_some())
    }
}

fn static_kind(value: &StaticDefault) -> ElementKind {
    match value {
        StaticDefault::Bool(_) => ElementKind::Bool,
        StaticDefault::Float64(_) => ElementKind::Float64,
        StaticDefault::Int32(_) => ElementKind::Int32,
        StaticDefault::Int64(_) => ElementKind::Int64,
        StaticDefault::String(_) => ElementKind::String,
    }
}

/// Package and constructor of the framework's static default helper.
fn static_accessor(value: &StaticDefault) -> (&'static str, String) {
    match value {
        StaticDefault::Bool(b) => ("booldefault", format!("booldefault.StaticBool({b})")),
        StaticDefault::Float64(f) => {
            ("float64default", format!("float64default.StaticFloat64({f:?})"))
        }
        StaticDefault::Int32(i) => ("int32default", format!("int32default.StaticInt32({i})")),
        StaticDefault::Int64(i) => ("int64default", format!("int64default.StaticInt64({i})")),
        StaticDefault::String(s) => {
            ("stringdefault", format!("stringdefault.StaticString({})", quote(s)))
        }
    }
}

impl Decorator for DefaultDecorator {
    fn schema(&self) -> String {
        let Some(default) = &self.0 else {
            return String::new();
        };
        if let Some(value) = &default.static_value {
            let (_, expr) = static_accessor(value);
            return format!("Default: {expr},\n");
        }
        match &default.custom {
            Some(custom) if !custom.schema_definition.is_empty() => {
                format!("Default: {},\n", custom.schema_definition)
            }
            _ => String::new(),
        }
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        let Some(default) = &self.0 else {
            return imports;
        };
        if let Some(value) = &default.static_value {
            let (package, _) = static_accessor(value);
            imports.add(Import::new(format!("{DEFAULT_PACKAGE_ROOT}/{package}")));
        }
        if let Some(custom) = &default.custom {
            imports.extend(custom.imports.iter().cloned());
        }
        imports
    }
}
