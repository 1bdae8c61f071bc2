use super::Decorator;
use crate::imports::{Import, ImportSet, TYPES_IMPORT};
use crate::spec::CustomType;

/// Type expressions derived from an associated external type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociatedCustomType {
    /// Schema `CustomType` expression, e.g. `WidgetType{}`
    pub type_expr: String,
    /// Model value type, e.g. `WidgetValue`
    pub value_type: String,
}

/// Resolves the `CustomType` schema line and the model value type.
///
/// An explicit custom type wins over the association-derived type, which in
/// turn wins over the kind's built-in type. When an explicit custom type is
/// present the default `types` import is replaced by the custom type's import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomTypeDecorator {
    custom: Option<CustomType>,
    associated: Option<AssociatedCustomType>,
}

impl CustomTypeDecorator {
    pub fn new(custom: Option<CustomType>, associated: Option<AssociatedCustomType>) -> Self {
        CustomTypeDecorator { custom, associated }
    }

    pub fn custom(&self) -> Option<&CustomType> {
        self.custom.as_ref()
    }

    /// Model value type override, if any.
    pub fn value_type(&self) -> Option<&str> {
        if let Some(custom) = &self.custom {
            if !custom.value_type.is_empty() {
                return Some(&custom.value_type);
            }
        }
        self.associated.as_ref().map(|a| a.value_type.as_str())
    }
}

impl Decorator for CustomTypeDecorator {
    fn schema(&self) -> String {
        if let Some(custom) = &self.custom {
            if !custom.type_name.is_empty() {
                return format!("CustomType: {},\n", custom.type_name);
            }
        }
        match &self.associated {
            Some(associated) => format!("CustomType: {},\n", associated.type_expr),
            None => String::new(),
        }
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        match &self.custom {
            Some(custom) => {
                if let Some(import) = &custom.import {
                    imports.add(import.clone());
                }
            }
            None => imports.add(Import::new(TYPES_IMPORT)),
        }
        imports
    }
}
