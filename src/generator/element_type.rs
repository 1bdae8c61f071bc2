//! Rendering of collection element types and object attribute types.

use super::kind::ElementKind;
use crate::identifier::quote;
use crate::imports::{ImportSet, ATTR_IMPORT, TYPES_IMPORT};
use crate::spec::{ElementType, ObjectAttributeType};

impl ElementType {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementType::Bool => ElementKind::Bool,
            ElementType::Float64 => ElementKind::Float64,
            ElementType::Int32 => ElementKind::Int32,
            ElementType::Int64 => ElementKind::Int64,
            ElementType::Number => ElementKind::Number,
            ElementType::String => ElementKind::String,
            ElementType::List(_) => ElementKind::List,
            ElementType::Map(_) => ElementKind::Map,
            ElementType::Set(_) => ElementKind::Set,
            ElementType::Object(_) => ElementKind::Object,
        }
    }

    /// Framework type expression, e.g. `types.ListType{\nElemType: types.StringType,\n}`.
    pub fn schema_type(&self) -> String {
        self.render("types")
    }

    /// Go value type of one element, e.g. `types.String`.
    pub fn value_type(&self) -> &'static str {
        self.kind().traits().value_type
    }

    fn render(&self, package: &str) -> String {
        let stem = self.kind().traits().stem;
        match self {
            ElementType::List(inner) | ElementType::Map(inner) | ElementType::Set(inner) => {
                format!("{package}.{stem}Type{{\nElemType: {},\n}}", inner.render(package))
            }
            ElementType::Object(attribute_types) => format!(
                "{package}.ObjectType{{\nAttrTypes: {},\n}}",
                attr_type_map(attribute_types, package)
            ),
            _ => format!("{package}.{stem}Type"),
        }
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add_path(TYPES_IMPORT);
        if self.contains_object() {
            imports.add_path(ATTR_IMPORT);
        }
        imports
    }

    fn contains_object(&self) -> bool {
        match self {
            ElementType::Object(_) => true,
            ElementType::List(inner) | ElementType::Map(inner) | ElementType::Set(inner) => {
                inner.contains_object()
            }
            _ => false,
        }
    }
}

/// `map[string]attr.Type{\n"a": types.StringType,\n}` in declaration order.
pub(crate) fn attr_type_map(attribute_types: &[ObjectAttributeType], package: &str) -> String {
    let mut out = String::from("map[string]attr.Type{\n");
    for attribute_type in attribute_types {
        out.push_str(&quote(&attribute_type.name));
        out.push_str(": ");
        out.push_str(&attribute_type.element_type.render(package));
        out.push_str(",\n");
    }
    out.push('}');
    out
}

/// `AttributeTypes` line of an object attribute.
pub(crate) fn attribute_types_schema(attribute_types: &[ObjectAttributeType]) -> String {
    format!("AttributeTypes: {},\n", attr_type_map(attribute_types, "types"))
}
