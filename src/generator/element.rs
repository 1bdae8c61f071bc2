//! Generator elements: the validated, typed counterpart of one attribute or block.

use std::fmt;

use tracing::debug;

use super::conversion::{AssocExtType, Direction, ToFromConversion};
use super::element_type::{attr_type_map, attribute_types_schema};
use super::kind::{ElementKind, TemplateFamily};
use super::model::ModelField;
use super::nested::{associated_object_type, NestedObject};
use super::schema::Surface;
use super::templates::{
    ObjectAttributeContext, ObjectContext, Templates, ToFromContext, ToFromFieldContext,
    ToFromObjectContext, WrapperContext, OBJECT_TYPE, OBJECT_VALUE, TO_FROM_COLLECTION,
    TO_FROM_OBJECT, TO_FROM_PRIMITIVE, TYPE, VALUE,
};
use crate::convert::{
    AssociatedCustomType, CustomTypeDecorator, Decorator, DefaultDecorator, DeprecationMessage,
    Description, PlanModifiers, Requiredness, Sensitive, Validators,
};
use crate::error::{GenerateError, Result};
use crate::identifier::{quote, to_pascal_case, Identifier};
use crate::imports::{associated_external_type_imports, ImportSet, ATTR_IMPORT};
use crate::spec::{
    AttributeSpec, BlockSpec, CollectionAttribute, ElementType, NestedCollectionAttribute,
    NestedCollectionBlock, ObjectAttribute, ObjectAttributeType, PrimitiveAttribute,
    SingleNestedAttribute, SingleNestedBlock,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Attribute,
    Block,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Attribute => "attribute",
            Role::Block => "block",
        }
    }

    fn framework_suffix(self) -> &'static str {
        match self {
            Role::Attribute => "Attribute",
            Role::Block => "Block",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Primitive,
    Collection { element_type: ElementType },
    Object { attribute_types: Vec<ObjectAttributeType> },
    Nested(NestedObject),
}

/// Decorators in the order their fragments are written.
#[derive(Debug, Clone, Default, PartialEq)]
struct Decorators {
    custom_type: CustomTypeDecorator,
    requiredness: Requiredness,
    sensitive: Sensitive,
    description: Description,
    deprecation_message: DeprecationMessage,
    plan_modifiers: PlanModifiers,
    validators: Validators,
    default: DefaultDecorator,
}

impl Decorators {
    fn schema(&self) -> String {
        let mut out = self.custom_type.schema();
        out.push_str(&self.requiredness.schema());
        out.push_str(&self.sensitive.schema());
        out.push_str(&self.description.schema());
        out.push_str(&self.deprecation_message.schema());
        out.push_str(&self.plan_modifiers.schema());
        out.push_str(&self.validators.schema());
        out.push_str(&self.default.schema());
        out
    }

    fn imports(&self) -> ImportSet {
        let mut imports = self.custom_type.imports();
        imports.merge(&self.default.imports());
        imports.merge(&self.plan_modifiers.imports());
        imports.merge(&self.validators.imports());
        imports
    }
}

/// One attribute or block of a schema, ready for emission.
///
/// Elements are immutable once built and own their children outright, so two
/// elements compare equal exactly when every decorator and every descendant
/// (matched by name) compares equal.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorElement {
    kind: ElementKind,
    role: Role,
    shape: Shape,
    /// Association of non-nested kinds; nested kinds keep theirs on the nested object.
    associated_external_type: Option<AssocExtType>,
    decorators: Decorators,
}

/// One row of a dispatch table: which selector picks which constructor.
struct Selector<S> {
    kind: ElementKind,
    is_set: fn(&S) -> bool,
    build: fn(&str, &S) -> Result<GeneratorElement>,
}

#[rustfmt::skip]
static ATTRIBUTE_SELECTORS: [Selector<AttributeSpec>; 14] = [
    Selector { kind: ElementKind::Bool, is_set: |a| a.bool.is_some(),
        build: |n, a| GeneratorElement::bool_attribute(n, a.bool.as_ref()) },
    Selector { kind: ElementKind::Float64, is_set: |a| a.float64.is_some(),
        build: |n, a| GeneratorElement::float64_attribute(n, a.float64.as_ref()) },
    Selector { kind: ElementKind::Int32, is_set: |a| a.int32.is_some(),
        build: |n, a| GeneratorElement::int32_attribute(n, a.int32.as_ref()) },
    Selector { kind: ElementKind::Int64, is_set: |a| a.int64.is_some(),
        build: |n, a| GeneratorElement::int64_attribute(n, a.int64.as_ref()) },
    Selector { kind: ElementKind::Number, is_set: |a| a.number.is_some(),
        build: |n, a| GeneratorElement::number_attribute(n, a.number.as_ref()) },
    Selector { kind: ElementKind::String, is_set: |a| a.string.is_some(),
        build: |n, a| GeneratorElement::string_attribute(n, a.string.as_ref()) },
    Selector { kind: ElementKind::List, is_set: |a| a.list.is_some(),
        build: |n, a| GeneratorElement::list_attribute(n, a.list.as_ref()) },
    Selector { kind: ElementKind::Map, is_set: |a| a.map.is_some(),
        build: |n, a| GeneratorElement::map_attribute(n, a.map.as_ref()) },
    Selector { kind: ElementKind::Set, is_set: |a| a.set.is_some(),
        build: |n, a| GeneratorElement::set_attribute(n, a.set.as_ref()) },
    Selector { kind: ElementKind::Object, is_set: |a| a.object.is_some(),
        build: |n, a| GeneratorElement::object_attribute(n, a.object.as_ref()) },
    Selector { kind: ElementKind::ListNested, is_set: |a| a.list_nested.is_some(),
        build: |n, a| GeneratorElement::list_nested_attribute(n, a.list_nested.as_ref()) },
    Selector { kind: ElementKind::MapNested, is_set: |a| a.map_nested.is_some(),
        build: |n, a| GeneratorElement::map_nested_attribute(n, a.map_nested.as_ref()) },
    Selector { kind: ElementKind::SetNested, is_set: |a| a.set_nested.is_some(),
        build: |n, a| GeneratorElement::set_nested_attribute(n, a.set_nested.as_ref()) },
    Selector { kind: ElementKind::SingleNested, is_set: |a| a.single_nested.is_some(),
        build: |n, a| GeneratorElement::single_nested_attribute(n, a.single_nested.as_ref()) },
];

#[rustfmt::skip]
static BLOCK_SELECTORS: [Selector<BlockSpec>; 3] = [
    Selector { kind: ElementKind::ListNested, is_set: |b| b.list_nested.is_some(),
        build: |n, b| GeneratorElement::list_nested_block(n, b.list_nested.as_ref()) },
    Selector { kind: ElementKind::SetNested, is_set: |b| b.set_nested.is_some(),
        build: |n, b| GeneratorElement::set_nested_block(n, b.set_nested.as_ref()) },
    Selector { kind: ElementKind::SingleNested, is_set: |b| b.single_nested.is_some(),
        build: |n, b| GeneratorElement::single_nested_block(n, b.single_nested.as_ref()) },
];

fn dispatch<S>(
    selectors: &[Selector<S>],
    role: Role,
    name: &str,
    spec: &S,
) -> Result<GeneratorElement> {
    if !Identifier::new(name).is_valid() {
        return Err(GenerateError::InvalidName {
            role: role.as_str(),
            name: name.to_string(),
        });
    }
    let selected: Vec<&Selector<S>> = selectors.iter().filter(|s| (s.is_set)(spec)).collect();
    match selected.as_slice() {
        [] => Err(GenerateError::UndefinedKind {
            role: role.as_str(),
            name: name.to_string(),
        }),
        [selector] => {
            let element = (selector.build)(name, spec).map_err(|e| e.in_element(name))?;
            debug!(element = name, kind = %selector.kind, role = %role, "constructed element");
            Ok(element)
        }
        many => Err(GenerateError::AmbiguousKind {
            role: role.as_str(),
            name: name.to_string(),
            kinds: many
                .iter()
                .map(|s| s.kind.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

macro_rules! constructors {
    ($($fn_name:ident($payload:ty) => $family:ident($kind:ident)),* $(,)?) => {
        impl GeneratorElement {
            $(
                pub fn $fn_name(name: &str, spec: Option<&$payload>) -> Result<Self> {
                    Self::$family(ElementKind::$kind, name, spec)
                }
            )*
        }
    };
}

constructors! {
    bool_attribute(PrimitiveAttribute) => build_primitive(Bool),
    float64_attribute(PrimitiveAttribute) => build_primitive(Float64),
    int32_attribute(PrimitiveAttribute) => build_primitive(Int32),
    int64_attribute(PrimitiveAttribute) => build_primitive(Int64),
    number_attribute(PrimitiveAttribute) => build_primitive(Number),
    string_attribute(PrimitiveAttribute) => build_primitive(String),
    list_attribute(CollectionAttribute) => build_collection(List),
    map_attribute(CollectionAttribute) => build_collection(Map),
    set_attribute(CollectionAttribute) => build_collection(Set),
    object_attribute(ObjectAttribute) => build_object(Object),
    list_nested_attribute(NestedCollectionAttribute)
        => build_nested_collection_attribute(ListNested),
    map_nested_attribute(NestedCollectionAttribute)
        => build_nested_collection_attribute(MapNested),
    set_nested_attribute(NestedCollectionAttribute)
        => build_nested_collection_attribute(SetNested),
    single_nested_attribute(SingleNestedAttribute) => build_single_nested_attribute(SingleNested),
    list_nested_block(NestedCollectionBlock) => build_nested_collection_block(ListNested),
    set_nested_block(NestedCollectionBlock) => build_nested_collection_block(SetNested),
    single_nested_block(SingleNestedBlock) => build_single_nested_block(SingleNested),
}

impl GeneratorElement {
    /// Build an attribute, picking the constructor from the single populated selector.
    pub fn from_attribute(spec: &AttributeSpec) -> Result<Self> {
        dispatch(&ATTRIBUTE_SELECTORS, Role::Attribute, &spec.name, spec)
    }

    /// Build a block, picking the constructor from the single populated selector.
    pub fn from_block(spec: &BlockSpec) -> Result<Self> {
        dispatch(&BLOCK_SELECTORS, Role::Block, &spec.name, spec)
    }

    fn build_primitive(
        kind: ElementKind,
        name: &str,
        spec: Option<&PrimitiveAttribute>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.attribute_label))?;
        let assoc = spec.associated_external_type.as_ref().map(AssocExtType::new);
        let pascal = to_pascal_case(name);
        let associated = assoc.as_ref().map(|_| AssociatedCustomType {
            type_expr: format!("{pascal}Type{{}}"),
            value_type: format!("{pascal}Value"),
        });

        Ok(GeneratorElement {
            kind,
            role: Role::Attribute,
            shape: Shape::Primitive,
            associated_external_type: assoc,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
                requiredness: Requiredness::new(spec.computed_optional_required),
                sensitive: Sensitive::new(spec.sensitive),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(traits.base_stem, spec.plan_modifiers.clone()),
                validators: Validators::new(traits.base_stem, spec.validators.clone()),
                default: DefaultDecorator::new(kind, spec.default.clone())?,
            },
        })
    }

    fn build_collection(
        kind: ElementKind,
        name: &str,
        spec: Option<&CollectionAttribute>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.attribute_label))?;
        let assoc = spec.associated_external_type.as_ref().map(AssocExtType::new);
        let pascal = to_pascal_case(name);
        let stem = traits.base_stem;
        let associated = assoc.as_ref().map(|_| AssociatedCustomType {
            type_expr: format!(
                "{pascal}Type{{\n{stem}Type: basetypes.{stem}Type{{\nElemType: {},\n}},\n}}",
                spec.element_type.schema_type()
            ),
            value_type: format!("{pascal}Value"),
        });

        Ok(GeneratorElement {
            kind,
            role: Role::Attribute,
            shape: Shape::Collection {
                element_type: spec.element_type.clone(),
            },
            associated_external_type: assoc,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
                requiredness: Requiredness::new(spec.computed_optional_required),
                sensitive: Sensitive::new(spec.sensitive),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(stem, spec.plan_modifiers.clone()),
                validators: Validators::new(stem, spec.validators.clone()),
                default: DefaultDecorator::new(kind, spec.default.clone())?,
            },
        })
    }

    fn build_object(kind: ElementKind, name: &str, spec: Option<&ObjectAttribute>) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.attribute_label))?;
        let assoc = spec.associated_external_type.as_ref().map(AssocExtType::new);
        let associated = assoc.as_ref().map(|_| associated_object_type(&to_pascal_case(name)));

        Ok(GeneratorElement {
            kind,
            role: Role::Attribute,
            shape: Shape::Object {
                attribute_types: spec.attribute_types.clone(),
            },
            associated_external_type: assoc,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
                requiredness: Requiredness::new(spec.computed_optional_required),
                sensitive: Sensitive::new(spec.sensitive),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(traits.base_stem, spec.plan_modifiers.clone()),
                validators: Validators::new(traits.base_stem, spec.validators.clone()),
                default: DefaultDecorator::new(kind, spec.default.clone())?,
            },
        })
    }

    fn build_nested_collection_attribute(
        kind: ElementKind,
        name: &str,
        spec: Option<&NestedCollectionAttribute>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.attribute_label))?;
        let nested = NestedObject::from_attribute_object(name, &spec.nested_object)?;

        Ok(GeneratorElement {
            kind,
            role: Role::Attribute,
            shape: Shape::Nested(nested),
            associated_external_type: None,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), None),
                requiredness: Requiredness::new(spec.computed_optional_required),
                sensitive: Sensitive::new(spec.sensitive),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(traits.base_stem, spec.plan_modifiers.clone()),
                validators: Validators::new(traits.base_stem, spec.validators.clone()),
                default: DefaultDecorator::new(kind, spec.default.clone())?,
            },
        })
    }

    fn build_single_nested_attribute(
        kind: ElementKind,
        name: &str,
        spec: Option<&SingleNestedAttribute>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.attribute_label))?;
        let nested = NestedObject::from_single_attribute(spec)?;
        let associated = nested
            .associated_external_type()
            .map(|_| associated_object_type(&to_pascal_case(name)));

        Ok(GeneratorElement {
            kind,
            role: Role::Attribute,
            shape: Shape::Nested(nested),
            associated_external_type: None,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
                requiredness: Requiredness::new(spec.computed_optional_required),
                sensitive: Sensitive::new(spec.sensitive),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(traits.base_stem, spec.plan_modifiers.clone()),
                validators: Validators::new(traits.base_stem, spec.validators.clone()),
                default: DefaultDecorator::new(kind, spec.default.clone())?,
            },
        })
    }

    fn build_nested_collection_block(
        kind: ElementKind,
        name: &str,
        spec: Option<&NestedCollectionBlock>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.block_label))?;
        let nested = NestedObject::from_block_object(name, &spec.nested_object)?;

        Ok(GeneratorElement {
            kind,
            role: Role::Block,
            shape: Shape::Nested(nested),
            associated_external_type: None,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), None),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(traits.base_stem, spec.plan_modifiers.clone()),
                validators: Validators::new(traits.base_stem, spec.validators.clone()),
                ..Decorators::default()
            },
        })
    }

    fn build_single_nested_block(
        kind: ElementKind,
        name: &str,
        spec: Option<&SingleNestedBlock>,
    ) -> Result<Self> {
        let traits = kind.traits();
        let spec = spec.ok_or(GenerateError::NilInput(traits.block_label))?;
        let nested = NestedObject::from_single_block(spec)?;
        let associated = nested
            .associated_external_type()
            .map(|_| associated_object_type(&to_pascal_case(name)));

        Ok(GeneratorElement {
            kind,
            role: Role::Block,
            shape: Shape::Nested(nested),
            associated_external_type: None,
            decorators: Decorators {
                custom_type: CustomTypeDecorator::new(spec.custom_type.clone(), associated),
                description: Description::new(spec.description.clone()),
                deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
                plan_modifiers: PlanModifiers::new(traits.base_stem, spec.plan_modifiers.clone()),
                validators: Validators::new(traits.base_stem, spec.validators.clone()),
                ..Decorators::default()
            },
        })
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn nested(&self) -> Option<&NestedObject> {
        match &self.shape {
            Shape::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    /// The element's association, wherever the kind keeps it.
    pub fn associated_external_type(&self) -> Option<&AssocExtType> {
        match &self.shape {
            Shape::Nested(nested) => nested.associated_external_type(),
            _ => self.associated_external_type.as_ref(),
        }
    }

    /// Reject decorators the surface's schema package has no field for, here
    /// and in every descendant.
    pub(crate) fn check_surface(&self, surface: Surface) -> Result<()> {
        let unsupported = |facet: &'static str| GenerateError::UnsupportedOnSurface {
            facet,
            surface: surface.as_str(),
        };
        if self.decorators.default.is_set() && !surface.allows_defaults() {
            return Err(unsupported("default"));
        }
        if !self.decorators.plan_modifiers.is_empty() && !surface.allows_plan_modifiers() {
            return Err(unsupported("plan modifiers"));
        }
        if self.decorators.requiredness.is_computed() && !surface.allows_computed() {
            return Err(unsupported("computed"));
        }
        match &self.shape {
            Shape::Nested(nested) => nested.check_surface(surface),
            _ => Ok(()),
        }
    }

    /// Schema fragment, e.g. `"name": schema.Int32Attribute{\nRequired: true,\n},`.
    pub fn schema(&self, name: &str) -> Result<String> {
        let traits = self.kind.traits();
        let mut out = format!(
            "{}: schema.{}{}{{\n",
            quote(name),
            traits.stem,
            self.role.framework_suffix()
        );
        match &self.shape {
            Shape::Primitive => {}
            Shape::Collection { element_type } => {
                out.push_str(&format!("ElementType: {},\n", element_type.schema_type()));
            }
            Shape::Object { attribute_types } => {
                out.push_str(&attribute_types_schema(attribute_types));
            }
            Shape::Nested(nested) if self.kind.is_nested_collection() => {
                out.push_str(&nested.object_schema(self.role)?);
            }
            Shape::Nested(nested) => out.push_str(&nested.fields_schema(self.role)?),
        }
        out.push_str(&self.decorators.schema());
        out.push_str("},");
        Ok(out)
    }

    /// Imports needed by everything this element and its descendants emit.
    pub fn imports(&self) -> ImportSet {
        let mut imports = self.decorators.imports();
        match &self.shape {
            Shape::Primitive => {}
            Shape::Collection { element_type } => imports.merge(&element_type.imports()),
            Shape::Object { attribute_types } => {
                imports.add_path(ATTR_IMPORT);
                for attribute_type in attribute_types {
                    imports.merge(&attribute_type.element_type.imports());
                }
            }
            Shape::Nested(nested) => imports.merge(&nested.imports()),
        }
        if let Some(assoc) = self.associated_external_type() {
            imports.merge(&associated_external_type_imports());
            for path in self.kind.traits().assoc_imports {
                imports.add_path(path);
            }
            imports.merge(&assoc.imports());
        }
        imports
    }

    /// Model struct field for this element.
    ///
    /// The value type is the custom type's value type when set, else the
    /// association's generated value, else the kind's framework type.
    pub fn model_field(&self, name: &str) -> Result<ModelField> {
        let id = Identifier::new(name);
        let value_type = self
            .decorators
            .custom_type
            .value_type()
            .unwrap_or(self.kind.traits().value_type);
        Ok(ModelField {
            name: id.to_pascal_case(),
            tfsdk_name: id.as_str().to_string(),
            value_type: value_type.to_string(),
        })
    }

    /// `attr.Type` expression used where this element appears inside an object.
    pub fn attr_type(&self, name: &str) -> String {
        let pascal = to_pascal_case(name);
        let stem = self.kind.traits().base_stem;
        let associated = self.associated_external_type().is_some();
        match &self.shape {
            Shape::Primitive if associated => format!("{pascal}Type{{}}"),
            Shape::Primitive => format!("basetypes.{stem}Type{{}}"),
            Shape::Collection { element_type } if associated => format!(
                "{pascal}Type{{\n{stem}Type: basetypes.{stem}Type{{\nElemType: {},\n}},\n}}",
                element_type.schema_type()
            ),
            Shape::Collection { element_type } => {
                format!("basetypes.{stem}Type{{\nElemType: {},\n}}", element_type.schema_type())
            }
            Shape::Object { .. } | Shape::Nested(_)
                if associated && !self.kind.is_nested_collection() =>
            {
                format!(
                    "{pascal}Type{{\nObjectType: basetypes.ObjectType{{\nAttrTypes: {pascal}Value{{}}.AttributeTypes(ctx),\n}},\n}}"
                )
            }
            Shape::Object { attribute_types } => format!(
                "basetypes.ObjectType{{\nAttrTypes: {},\n}}",
                attr_type_map(attribute_types, "types")
            ),
            Shape::Nested(nested) => {
                let object = match nested.associated_external_type() {
                    Some(_) => format!("{pascal}Value{{}}.Type(ctx)"),
                    None => format!(
                        "basetypes.ObjectType{{\nAttrTypes: {},\n}}",
                        nested.attr_type_map()
                    ),
                };
                if self.kind.is_nested_collection() {
                    format!("basetypes.{stem}Type{{\nElemType: {object},\n}}")
                } else {
                    object
                }
            }
        }
    }

    /// `attr.Value` type of this element inside a generated object value.
    pub fn attr_value(&self, name: &str) -> String {
        if self.associated_external_type().is_some() && !self.kind.is_nested_collection() {
            return format!("{}Value", to_pascal_case(name));
        }
        format!("basetypes.{}Value", self.kind.traits().base_stem)
    }

    /// Conversion from the generated value towards the external type.
    pub fn to(&self) -> Result<ToFromConversion> {
        self.conversion(Direction::To)
    }

    /// Conversion from the external type back to the generated value.
    pub fn from(&self) -> Result<ToFromConversion> {
        self.conversion(Direction::From)
    }

    fn conversion(&self, direction: Direction) -> Result<ToFromConversion> {
        if let Some(assoc) = self.associated_external_type() {
            if !self.kind.is_nested_collection() {
                return Ok(ToFromConversion::Associated(assoc.clone()));
            }
        }
        let element_type = match &self.shape {
            Shape::Collection { element_type } => Some(element_type.schema_type()),
            Shape::Object { attribute_types } => Some(attr_type_map(attribute_types, "types")),
            _ => None,
        };
        ToFromConversion::for_kind(self.kind, direction, element_type)
    }

    /// Wrapper type and value declarations for the association, followed by
    /// those of every descendant that carries one.
    pub fn custom_type_and_value(&self, name: &str, templates: &Templates) -> Result<String> {
        let mut out = String::new();
        if self.associated_external_type().is_some() {
            let pascal = to_pascal_case(name);
            let traits = self.kind.traits();
            match traits.family {
                TemplateFamily::Primitive | TemplateFamily::Collection => {
                    let elem_type = match &self.shape {
                        Shape::Collection { element_type } => Some(element_type.schema_type()),
                        _ => None,
                    };
                    let ctx = |elem_type| WrapperContext {
                        name: &pascal,
                        stem: traits.base_stem,
                        elem_type,
                    };
                    out.push_str(&templates.render(TYPE, ctx(elem_type.clone()))?);
                    out.push_str(&templates.render(VALUE, ctx(elem_type))?);
                }
                TemplateFamily::Object => {
                    let attributes = self.object_attributes();
                    out.push_str(&templates.render(
                        OBJECT_TYPE,
                        ObjectContext { name: &pascal, attributes: &attributes },
                    )?);
                    out.push_str(&templates.render(
                        OBJECT_VALUE,
                        ObjectContext { name: &pascal, attributes: &attributes },
                    )?);
                }
            }
        }
        if let Shape::Nested(nested) = &self.shape {
            out.push_str(&nested.custom_types_and_values(templates)?);
        }
        Ok(out)
    }

    fn object_attributes(&self) -> Vec<ObjectAttributeContext> {
        match &self.shape {
            Shape::Object { attribute_types } => attribute_types
                .iter()
                .map(|attribute_type| {
                    let id = Identifier::new(attribute_type.name.as_str());
                    let stem = attribute_type.element_type.kind().traits().base_stem;
                    ObjectAttributeContext {
                        name: attribute_type.name.clone(),
                        field: id.to_pascal_case(),
                        var: id.to_camel_case(),
                        attr_type: attribute_type.element_type.schema_type(),
                        attr_value: format!("basetypes.{stem}Value"),
                    }
                })
                .collect(),
            Shape::Nested(nested) => nested.object_attributes(),
            _ => Vec::new(),
        }
    }

    /// Bridging functions for the association, followed by those of every
    /// descendant that carries one.
    pub fn to_from_functions(&self, name: &str, templates: &Templates) -> Result<String> {
        let mut out = String::new();
        if let Some(assoc) = self.associated_external_type() {
            let pascal = to_pascal_case(name);
            let traits = self.kind.traits();
            let rendered = match &self.shape {
                Shape::Primitive => templates.render(
                    TO_FROM_PRIMITIVE,
                    ToFromContext {
                        name: &pascal,
                        stem: traits.base_stem,
                        assoc: assoc.context(),
                        to: traits.to,
                        from: traits.from,
                        go_type: self.kind.go_type(),
                        elem_type: None,
                    },
                )?,
                Shape::Collection { element_type } => templates.render(
                    TO_FROM_COLLECTION,
                    ToFromContext {
                        name: &pascal,
                        stem: traits.base_stem,
                        assoc: assoc.context(),
                        to: traits.to,
                        from: traits.from,
                        go_type: None,
                        elem_type: Some(element_type.schema_type()),
                    },
                )?,
                Shape::Object { attribute_types } => {
                    let fields = attribute_types
                        .iter()
                        .map(|attribute_type| -> Result<ToFromFieldContext> {
                            let id = Identifier::new(attribute_type.name.as_str());
                            let et = &attribute_type.element_type;
                            Ok(ToFromFieldContext {
                                field: id.to_pascal_case(),
                                var: id.to_camel_case(),
                                to: ToFromConversion::for_element_type(et, Direction::To)?
                                    .context(),
                                from: ToFromConversion::for_element_type(et, Direction::From)?
                                    .context(),
                            })
                        })
                        .collect::<Result<Vec<_>>>()?;
                    templates.render(
                        TO_FROM_OBJECT,
                        ToFromObjectContext { name: &pascal, assoc: assoc.context(), fields },
                    )?
                }
                Shape::Nested(nested) => templates.render(
                    TO_FROM_OBJECT,
                    ToFromObjectContext {
                        name: &pascal,
                        assoc: assoc.context(),
                        fields: nested.conversion_fields()?,
                    },
                )?,
            };
            out.push_str(&rendered);
        }
        if let Shape::Nested(nested) = &self.shape {
            out.push_str(&nested.to_from_functions(templates)?);
        }
        Ok(out)
    }
}
