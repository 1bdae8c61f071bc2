//! Per-kind data table.
//!
//! Every element kind shares the same construction and emission machinery;
//! what differs between them (framework type names, accessors, labels) lives
//! in one static [`KindTraits`] row per [`ElementKind`].

use std::fmt;

use crate::imports::MATH_BIG_IMPORT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Bool,
    Float64,
    Int32,
    Int64,
    Number,
    String,
    List,
    Map,
    Set,
    Object,
    ListNested,
    MapNested,
    SetNested,
    SingleNested,
}

/// Which named templates render the wrapper types and bridging functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFamily {
    /// `type`, `value` and `to_from_primitive`
    Primitive,
    /// `type`, `value` and `to_from_collection`
    Collection,
    /// `object_type`, `object_value` and `to_from_object`
    Object,
}

#[derive(Debug)]
pub struct KindTraits {
    /// Name of the selector on the specification node, e.g. `list_nested`
    pub selector: &'static str,
    /// Framework type stem: `schema.{stem}Attribute`, `basetypes.{stem}Type`
    pub stem: &'static str,
    /// Model field type when no override applies
    pub value_type: &'static str,
    /// Stem of the `basetypes` type and value, also the type parameter of
    /// validator and plan modifier slices
    pub base_stem: &'static str,
    pub family: TemplateFamily,
    pub attribute_label: &'static str,
    /// Empty for kinds that cannot be blocks
    pub block_label: &'static str,
    /// Accessor reading the value into a Go pointer; `None` when unsupported
    pub to: Option<&'static str>,
    /// Constructor building the value from a Go pointer
    pub from: Option<&'static str>,
    /// Packages the bridging code of an associated external type needs on
    /// top of the shared set
    pub assoc_imports: &'static [&'static str],
}

macro_rules! kind_traits {
    (
        $selector:literal, $stem:literal, $value:literal, $base:literal, $family:ident,
        $attr:literal, $block:literal, $to:expr, $from:expr, $assoc:expr
    ) => {
        KindTraits {
            selector: $selector,
            stem: $stem,
            value_type: $value,
            base_stem: $base,
            family: TemplateFamily::$family,
            attribute_label: $attr,
            block_label: $block,
            to: $to,
            from: $from,
            assoc_imports: $assoc,
        }
    };
}

/// Indexed by `ElementKind as usize`.
#[rustfmt::skip]
static KIND_TRAITS: [KindTraits; 14] = [
    kind_traits!("bool", "Bool", "types.Bool", "Bool", Primitive, "bool attribute", "",
        Some("ValueBoolPointer"), Some("BoolPointerValue"), &[]),
    kind_traits!("float64", "Float64", "types.Float64", "Float64", Primitive,
        "float64 attribute", "", Some("ValueFloat64Pointer"), Some("Float64PointerValue"), &[]),
    kind_traits!("int32", "Int32", "types.Int32", "Int32", Primitive, "int32 attribute", "",
        Some("ValueInt32Pointer"), Some("Int32PointerValue"), &[]),
    kind_traits!("int64", "Int64", "types.Int64", "Int64", Primitive, "int64 attribute", "",
        Some("ValueInt64Pointer"), Some("Int64PointerValue"), &[]),
    kind_traits!("number", "Number", "types.Number", "Number", Primitive, "number attribute", "",
        Some("ValueBigFloat"), Some("NumberValue"), &[MATH_BIG_IMPORT]),
    kind_traits!("string", "String", "types.String", "String", Primitive, "string attribute", "",
        Some("ValueStringPointer"), Some("StringPointerValue"), &[]),
    kind_traits!("list", "List", "types.List", "List", Collection, "list attribute", "",
        Some("ElementsAs"), Some("ListValueFrom"), &[]),
    kind_traits!("map", "Map", "types.Map", "Map", Collection, "map attribute", "",
        Some("ElementsAs"), Some("MapValueFrom"), &[]),
    kind_traits!("set", "Set", "types.Set", "Set", Collection, "set attribute", "",
        Some("ElementsAs"), Some("SetValueFrom"), &[]),
    kind_traits!("object", "Object", "types.Object", "Object", Object, "object attribute", "",
        Some("As"), Some("ObjectValueFrom"), &[]),
    kind_traits!("list_nested", "ListNested", "types.List", "List", Object,
        "list nested attribute", "list nested block", None, None, &[]),
    kind_traits!("map_nested", "MapNested", "types.Map", "Map", Object,
        "map nested attribute", "", None, None, &[]),
    kind_traits!("set_nested", "SetNested", "types.Set", "Set", Object,
        "set nested attribute", "set nested block", None, None, &[]),
    kind_traits!("single_nested", "SingleNested", "types.Object", "Object", Object,
        "single nested attribute", "single nested block", None, None, &[]),
];

impl ElementKind {
    pub const ALL: [ElementKind; 14] = [
        ElementKind::Bool,
        ElementKind::Float64,
        ElementKind::Int32,
        ElementKind::Int64,
        ElementKind::Number,
        ElementKind::String,
        ElementKind::List,
        ElementKind::Map,
        ElementKind::Set,
        ElementKind::Object,
        ElementKind::ListNested,
        ElementKind::MapNested,
        ElementKind::SetNested,
        ElementKind::SingleNested,
    ];

    pub fn traits(self) -> &'static KindTraits {
        &KIND_TRAITS[self as usize]
    }

    /// Go type behind the pointer accessors of primitive kinds.
    pub fn go_type(self) -> Option<&'static str> {
        match self {
            ElementKind::Bool => Some("bool"),
            ElementKind::Float64 => Some("float64"),
            ElementKind::Int32 => Some("int32"),
            ElementKind::Int64 => Some("int64"),
            ElementKind::Number => Some("big.Float"),
            ElementKind::String => Some("string"),
            _ => None,
        }
    }

    /// Kinds holding child elements.
    pub fn is_nested(self) -> bool {
        matches!(
            self,
            ElementKind::ListNested
                | ElementKind::MapNested
                | ElementKind::SetNested
                | ElementKind::SingleNested
        )
    }

    /// Kinds whose children sit inside a `NestedObject` wrapper.
    pub fn is_nested_collection(self) -> bool {
        self.is_nested() && self != ElementKind::SingleNested
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.traits().selector)
    }
}
