use crate::imports::Import;

/// The whole input handed over by the specification loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specification {
    pub provider: Option<Provider>,
    pub resources: Vec<Resource>,
    pub data_sources: Vec<DataSource>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provider {
    pub name: String,
    pub schema: Option<SurfaceSchema>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    pub name: String,
    pub schema: Option<SurfaceSchema>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSource {
    pub name: String,
    pub schema: Option<SurfaceSchema>,
}

/// Schema of one provider, resource or data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceSchema {
    pub attributes: Vec<AttributeSpec>,
    pub blocks: Vec<BlockSpec>,
    pub description: Option<String>,
    pub markdown_description: Option<String>,
    pub deprecation_message: Option<String>,
}

/// A named attribute. Exactly one of the kind selectors must be populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSpec {
    pub name: String,
    pub bool: Option<PrimitiveAttribute>,
    pub float64: Option<PrimitiveAttribute>,
    pub int32: Option<PrimitiveAttribute>,
    pub int64: Option<PrimitiveAttribute>,
    pub number: Option<PrimitiveAttribute>,
    pub string: Option<PrimitiveAttribute>,
    pub list: Option<CollectionAttribute>,
    pub map: Option<CollectionAttribute>,
    pub set: Option<CollectionAttribute>,
    pub object: Option<ObjectAttribute>,
    pub list_nested: Option<NestedCollectionAttribute>,
    pub map_nested: Option<NestedCollectionAttribute>,
    pub set_nested: Option<NestedCollectionAttribute>,
    pub single_nested: Option<SingleNestedAttribute>,
}

impl AttributeSpec {
    pub fn named(name: impl Into<String>) -> Self {
        AttributeSpec {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A named block. Exactly one of the kind selectors must be populated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockSpec {
    pub name: String,
    pub list_nested: Option<NestedCollectionBlock>,
    pub set_nested: Option<NestedCollectionBlock>,
    pub single_nested: Option<SingleNestedBlock>,
}

impl BlockSpec {
    pub fn named(name: impl Into<String>) -> Self {
        BlockSpec {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Bool, float64, int32, int64, number and string attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveAttribute {
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub default: Option<DefaultValue>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub sensitive: Option<bool>,
    pub validators: Vec<CustomExpression>,
}

/// List, map and set attributes of a single element type.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionAttribute {
    pub element_type: ElementType,
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub default: Option<DefaultValue>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub sensitive: Option<bool>,
    pub validators: Vec<CustomExpression>,
}

impl CollectionAttribute {
    pub fn of(element_type: ElementType) -> Self {
        CollectionAttribute {
            element_type,
            computed_optional_required: None,
            associated_external_type: None,
            custom_type: None,
            default: None,
            deprecation_message: None,
            description: None,
            plan_modifiers: Vec::new(),
            sensitive: None,
            validators: Vec::new(),
        }
    }
}

/// Object attributes with a fixed, ordered set of attribute types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectAttribute {
    pub attribute_types: Vec<ObjectAttributeType>,
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub default: Option<DefaultValue>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub sensitive: Option<bool>,
    pub validators: Vec<CustomExpression>,
}

/// List, map and set attributes whose elements are nested objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedCollectionAttribute {
    pub nested_object: NestedAttributeObject,
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    pub custom_type: Option<CustomType>,
    pub default: Option<DefaultValue>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub sensitive: Option<bool>,
    pub validators: Vec<CustomExpression>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedAttributeObject {
    pub attributes: Vec<AttributeSpec>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub validators: Vec<CustomExpression>,
}

/// A single nested object attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleNestedAttribute {
    pub attributes: Vec<AttributeSpec>,
    pub computed_optional_required: Option<ComputedOptionalRequired>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub default: Option<DefaultValue>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub sensitive: Option<bool>,
    pub validators: Vec<CustomExpression>,
}

/// List and set blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedCollectionBlock {
    pub nested_object: NestedBlockObject,
    pub custom_type: Option<CustomType>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub validators: Vec<CustomExpression>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedBlockObject {
    pub attributes: Vec<AttributeSpec>,
    pub blocks: Vec<BlockSpec>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub validators: Vec<CustomExpression>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleNestedBlock {
    pub attributes: Vec<AttributeSpec>,
    pub blocks: Vec<BlockSpec>,
    pub associated_external_type: Option<AssociatedExternalType>,
    pub custom_type: Option<CustomType>,
    pub deprecation_message: Option<String>,
    pub description: Option<String>,
    pub plan_modifiers: Vec<CustomExpression>,
    pub validators: Vec<CustomExpression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputedOptionalRequired {
    Computed,
    ComputedOptional,
    Optional,
    Required,
}

/// Replaces the framework type of an element with a caller-supplied one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomType {
    pub import: Option<Import>,
    /// Schema type expression, e.g. `mytypes.EmailType{}`
    pub type_name: String,
    /// Model value type, e.g. `mytypes.Email`
    pub value_type: String,
}

/// Declares that the generated value must convert to and from an external type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociatedExternalType {
    pub import: Option<Import>,
    /// Go type expression, usually a pointer such as `*api.Widget`
    pub type_name: String,
}

/// A caller-supplied Go expression plus the imports it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomExpression {
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

impl CustomExpression {
    pub fn new(schema_definition: impl Into<String>) -> Self {
        CustomExpression {
            imports: Vec::new(),
            schema_definition: schema_definition.into(),
        }
    }

    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(Import::new(path));
        self
    }
}

/// Default value of an element; a static value takes precedence over a custom one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultValue {
    pub custom: Option<CustomExpression>,
    pub static_value: Option<StaticDefault>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StaticDefault {
    Bool(bool),
    Float64(f64),
    Int32(i32),
    Int64(i64),
    String(String),
}

/// Element type of a list, map or set attribute, or of an object attribute type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    Bool,
    Float64,
    Int32,
    Int64,
    Number,
    String,
    List(Box<ElementType>),
    Map(Box<ElementType>),
    Set(Box<ElementType>),
    Object(Vec<ObjectAttributeType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAttributeType {
    pub name: String,
    pub element_type: ElementType,
}

impl ObjectAttributeType {
    pub fn new(name: impl Into<String>, element_type: ElementType) -> Self {
        ObjectAttributeType {
            name: name.into(),
            element_type,
        }
    }
}
