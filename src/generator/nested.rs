//! Nested objects: the recursive part of the generator.
//!
//! A nested object owns its children by name. Every aggregate it produces
//! (schema text, imports, wrapper types, bridging functions) visits the
//! attributes and then the blocks, each in sorted name order, so the output
//! never depends on the order children were declared in.

use std::collections::BTreeMap;

use tracing::warn;

use super::conversion::AssocExtType;
use super::element::{GeneratorElement, Role};
use super::schema::Surface;
use super::templates::{ObjectAttributeContext, Templates, ToFromFieldContext};
use crate::convert::{
    AssociatedCustomType, CustomTypeDecorator, Decorator, PlanModifiers, Validators,
};
use crate::error::{GenerateError, Result};
use crate::identifier::{quote, to_pascal_case, Identifier};
use crate::imports::ImportSet;
use crate::spec::{
    AttributeSpec, BlockSpec, NestedAttributeObject, NestedBlockObject, SingleNestedAttribute,
    SingleNestedBlock,
};

/// Custom type derived from an object-valued association.
pub(crate) fn associated_object_type(pascal: &str) -> AssociatedCustomType {
    AssociatedCustomType {
        type_expr: format!(
            "{pascal}Type{{\nObjectType: types.ObjectType{{\nAttrTypes: {pascal}Value{{}}.AttributeTypes(ctx),\n}},\n}}"
        ),
        value_type: format!("{pascal}Value"),
    }
}

/// Build the children of a nested object.
///
/// Duplicate names keep the first declaration.
pub(crate) fn build_attributes(
    specs: &[AttributeSpec],
) -> Result<BTreeMap<String, GeneratorElement>> {
    let mut attributes = BTreeMap::new();
    for spec in specs {
        let element = GeneratorElement::from_attribute(spec)?;
        if attributes.contains_key(&spec.name) {
            warn!(attribute = %spec.name, "duplicate attribute name, keeping first declaration");
            continue;
        }
        attributes.insert(spec.name.clone(), element);
    }
    Ok(attributes)
}

pub(crate) fn build_blocks(specs: &[BlockSpec]) -> Result<BTreeMap<String, GeneratorElement>> {
    let mut blocks = BTreeMap::new();
    for spec in specs {
        let element = GeneratorElement::from_block(spec)?;
        if blocks.contains_key(&spec.name) {
            warn!(block = %spec.name, "duplicate block name, keeping first declaration");
            continue;
        }
        blocks.insert(spec.name.clone(), element);
    }
    Ok(blocks)
}

/// Children and object-level decorators of a nested kind.
///
/// For list, map and set nested kinds the custom type, plan modifiers and
/// validators here belong to the `NestedObject` wrapper. Single nested kinds
/// leave them empty and carry their decorators on the element itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedObject {
    attributes: BTreeMap<String, GeneratorElement>,
    blocks: BTreeMap<String, GeneratorElement>,
    associated_external_type: Option<AssocExtType>,
    custom_type: CustomTypeDecorator,
    plan_modifiers: PlanModifiers,
    validators: Validators,
}

impl NestedObject {
    pub(crate) fn from_attribute_object(name: &str, spec: &NestedAttributeObject) -> Result<Self> {
        let assoc = spec.associated_external_type.as_ref().map(AssocExtType::new);
        let associated = assoc.as_ref().map(|_| associated_object_type(&to_pascal_case(name)));
        Ok(NestedObject {
            attributes: build_attributes(&spec.attributes)?,
            blocks: BTreeMap::new(),
            associated_external_type: assoc,
            custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
            plan_modifiers: PlanModifiers::new("Object", spec.plan_modifiers.clone()),
            validators: Validators::new("Object", spec.validators.clone()),
        })
    }

    pub(crate) fn from_block_object(name: &str, spec: &NestedBlockObject) -> Result<Self> {
        let assoc = spec.associated_external_type.as_ref().map(AssocExtType::new);
        let associated = assoc.as_ref().map(|_| associated_object_type(&to_pascal_case(name)));
        Ok(NestedObject {
            attributes: build_attributes(&spec.attributes)?,
            blocks: build_blocks(&spec.blocks)?,
            associated_external_type: assoc,
            custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
            plan_modifiers: PlanModifiers::new("Object", spec.plan_modifiers.clone()),
            validators: Validators::new("Object", spec.validators.clone()),
        })
    }

    pub(crate) fn from_single_attribute(spec: &SingleNestedAttribute) -> Result<Self> {
        Ok(NestedObject {
            attributes: build_attributes(&spec.attributes)?,
            associated_external_type: spec.associated_external_type.as_ref().map(AssocExtType::new),
            ..NestedObject::default()
        })
    }

    pub(crate) fn from_single_block(spec: &SingleNestedBlock) -> Result<Self> {
        Ok(NestedObject {
            attributes: build_attributes(&spec.attributes)?,
            blocks: build_blocks(&spec.blocks)?,
            associated_external_type: spec.associated_external_type.as_ref().map(AssocExtType::new),
            ..NestedObject::default()
        })
    }

    pub fn attributes(&self) -> &BTreeMap<String, GeneratorElement> {
        &self.attributes
    }

    pub fn blocks(&self) -> &BTreeMap<String, GeneratorElement> {
        &self.blocks
    }

    pub fn associated_external_type(&self) -> Option<&AssocExtType> {
        self.associated_external_type.as_ref()
    }

    /// Attributes then blocks, each sorted by name.
    pub fn children(&self) -> impl Iterator<Item = (&str, &GeneratorElement)> {
        self.attributes
            .iter()
            .chain(self.blocks.iter())
            .map(|(name, element)| (name.as_str(), element))
    }

    /// Object plan modifiers, then every child against `surface`.
    pub(crate) fn check_surface(&self, surface: Surface) -> Result<()> {
        if !self.plan_modifiers.is_empty() && !surface.allows_plan_modifiers() {
            return Err(GenerateError::UnsupportedOnSurface {
                facet: "plan modifiers",
                surface: surface.as_str(),
            });
        }
        for (name, child) in self.children() {
            child.check_surface(surface).map_err(|e| e.in_element(name))?;
        }
        Ok(())
    }

    /// `Attributes` and, for blocks, `Blocks` maps.
    pub(crate) fn fields_schema(&self, role: Role) -> Result<String> {
        let mut out = String::from("Attributes: map[string]schema.Attribute{\n");
        for (name, attribute) in &self.attributes {
            out.push_str(&attribute.schema(name).map_err(|e| e.in_element(name.as_str()))?);
            out.push('\n');
        }
        out.push_str("},\n");

        if role == Role::Block && !self.blocks.is_empty() {
            out.push_str("Blocks: map[string]schema.Block{\n");
            for (name, block) in &self.blocks {
                out.push_str(&block.schema(name).map_err(|e| e.in_element(name.as_str()))?);
                out.push('\n');
            }
            out.push_str("},\n");
        }
        Ok(out)
    }

    /// The `NestedObject` wrapper of list, map and set nested kinds.
    pub(crate) fn object_schema(&self, role: Role) -> Result<String> {
        let wrapper = match role {
            Role::Attribute => "NestedAttributeObject",
            Role::Block => "NestedBlockObject",
        };
        let mut out = format!("NestedObject: schema.{wrapper}{{\n");
        out.push_str(&self.fields_schema(role)?);
        out.push_str(&self.custom_type.schema());
        out.push_str(&self.plan_modifiers.schema());
        out.push_str(&self.validators.schema());
        out.push_str("},\n");
        Ok(out)
    }

    /// Object-level decorator imports followed by every descendant's imports.
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.custom_type.imports();
        imports.merge(&self.plan_modifiers.imports());
        imports.merge(&self.validators.imports());
        for (_, child) in self.children() {
            imports.merge(&child.imports());
        }
        imports
    }

    /// `map[string]attr.Type{...}` of the children.
    pub(crate) fn attr_type_map(&self) -> String {
        let mut out = String::from("map[string]attr.Type{\n");
        for (name, child) in self.children() {
            out.push_str(&quote(name));
            out.push_str(": ");
            out.push_str(&child.attr_type(name));
            out.push_str(",\n");
        }
        out.push('}');
        out
    }

    pub(crate) fn object_attributes(&self) -> Vec<ObjectAttributeContext> {
        self.children()
            .map(|(name, child)| {
                let id = Identifier::new(name);
                ObjectAttributeContext {
                    name: name.to_string(),
                    field: id.to_pascal_case(),
                    var: id.to_camel_case(),
                    attr_type: child.attr_type(name),
                    attr_value: child.attr_value(name),
                }
            })
            .collect()
    }

    pub(crate) fn custom_types_and_values(&self, templates: &Templates) -> Result<String> {
        let mut out = String::new();
        for (name, child) in self.children() {
            let rendered = child
                .custom_type_and_value(name, templates)
                .map_err(|e| e.in_element(name))?;
            out.push_str(&rendered);
        }
        Ok(out)
    }

    /// Per-child conversions for the parent's composite bridging function.
    ///
    /// Children whose kind cannot be bridged are left out of the composite
    /// with a warning; any other failure aborts.
    pub(crate) fn conversion_fields(&self) -> Result<Vec<ToFromFieldContext>> {
        let mut fields = Vec::new();
        for (name, child) in self.children() {
            let (to, from) = match (child.to(), child.from()) {
                (Ok(to), Ok(from)) => (to, from),
                (Err(e), _) | (_, Err(e)) if e.is_unimplemented() => {
                    warn!(element = name, error = %e, "skipping bridging conversion");
                    continue;
                }
                (Err(e), _) | (_, Err(e)) => return Err(e.in_element(name)),
            };
            let id = Identifier::new(name);
            fields.push(ToFromFieldContext {
                field: id.to_pascal_case(),
                var: id.to_camel_case(),
                to: to.context(),
                from: from.context(),
            });
        }
        Ok(fields)
    }

    pub(crate) fn to_from_functions(&self, templates: &Templates) -> Result<String> {
        let mut out = String::new();
        for (name, child) in self.children() {
            let rendered = child
                .to_from_functions(name, templates)
                .map_err(|e| e.in_element(name))?;
            out.push_str(&rendered);
        }
        Ok(out)
    }
}
