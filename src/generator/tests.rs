#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::error::GenerateError;
use crate::imports::{
    Import, ATTR_IMPORT, BASETYPES_IMPORT, DIAG_IMPORT, FMT_IMPORT, MATH_BIG_IMPORT, TFTYPES_IMPORT,
    TYPES_IMPORT, VALIDATOR_IMPORT,
};
use crate::spec::{
    AssociatedExternalType, AttributeSpec, BlockSpec, CollectionAttribute, ComputedOptionalRequired,
    CustomExpression, CustomType, DefaultValue, ElementType, NestedAttributeObject,
    NestedBlockObject, NestedCollectionAttribute, NestedCollectionBlock, ObjectAttribute,
    ObjectAttributeType, PrimitiveAttribute, SingleNestedAttribute, SingleNestedBlock,
    StaticDefault, SurfaceSchema,
};

const APISDK: &str = "example.com/apisdk";

fn required() -> PrimitiveAttribute {
    PrimitiveAttribute {
        computed_optional_required: Some(ComputedOptionalRequired::Required),
        ..Default::default()
    }
}

fn assoc(type_name: &str) -> Option<AssociatedExternalType> {
    Some(AssociatedExternalType {
        import: Some(Import::new(APISDK)),
        type_name: type_name.to_string(),
    })
}

fn string_attr(name: &str, spec: PrimitiveAttribute) -> AttributeSpec {
    AttributeSpec {
        string: Some(spec),
        ..AttributeSpec::named(name)
    }
}

fn bool_attr(name: &str, spec: PrimitiveAttribute) -> AttributeSpec {
    AttributeSpec {
        bool: Some(spec),
        ..AttributeSpec::named(name)
    }
}

fn map_nested_attr(name: &str) -> AttributeSpec {
    AttributeSpec {
        map_nested: Some(NestedCollectionAttribute::default()),
        ..AttributeSpec::named(name)
    }
}

fn templates() -> &'static Templates {
    Templates::builtin().unwrap()
}

// ---------------------------------------------------------------------------
// Schema fragments
// ---------------------------------------------------------------------------

#[test]
fn test_required_bool_schema() {
    let element = GeneratorElement::bool_attribute("bool_attribute", Some(&required())).unwrap();
    assert_eq!(
        element.schema("bool_attribute").unwrap(),
        "\"bool_attribute\": schema.BoolAttribute{\nRequired: true,\n},"
    );
    assert_eq!(element.kind(), ElementKind::Bool);
    assert_eq!(element.role(), Role::Attribute);
}

#[test]
fn test_int32_static_default() {
    let spec = PrimitiveAttribute {
        default: Some(DefaultValue {
            custom: None,
            static_value: Some(StaticDefault::Int32(1234)),
        }),
        ..Default::default()
    };
    let element = GeneratorElement::int32_attribute("int32_attribute", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("int32_attribute").unwrap(),
        "\"int32_attribute\": schema.Int32Attribute{\nDefault: int32default.StaticInt32(1234),\n},"
    );
    assert_eq!(
        element.imports().paths(),
        vec![
            TYPES_IMPORT,
            "github.com/hashicorp/terraform-plugin-framework/resource/schema/int32default",
        ]
    );
}

#[test]
fn test_validators_keep_declaration_order() {
    let spec = PrimitiveAttribute {
        validators: vec![
            CustomExpression::new("int32validator.AtLeast(1)").with_import(
                "github.com/hashicorp/terraform-plugin-framework-validators/int32validator",
            ),
            CustomExpression::new("mycheck.Positive()").with_import("example.com/mycheck"),
        ],
        ..Default::default()
    };
    let element = GeneratorElement::int32_attribute("count", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("count").unwrap(),
        "\"count\": schema.Int32Attribute{\nValidators: []validator.Int32{\nint32validator.AtLeast(1),\nmycheck.Positive(),\n},\n},"
    );
    assert_eq!(
        element.imports().paths(),
        vec![
            TYPES_IMPORT,
            VALIDATOR_IMPORT,
            "github.com/hashicorp/terraform-plugin-framework-validators/int32validator",
            "example.com/mycheck",
        ]
    );
}

#[test]
fn test_decorators_written_in_fixed_order() {
    let spec = PrimitiveAttribute {
        computed_optional_required: Some(ComputedOptionalRequired::ComputedOptional),
        sensitive: Some(true),
        description: Some("the name".into()),
        deprecation_message: Some("use label".into()),
        plan_modifiers: vec![CustomExpression::new("stringplanmodifier.UseStateForUnknown()")],
        default: Some(DefaultValue {
            custom: None,
            static_value: Some(StaticDefault::String("x".into())),
        }),
        ..Default::default()
    };
    let schema = GeneratorElement::string_attribute("name", Some(&spec))
        .unwrap()
        .schema("name")
        .unwrap();
    assert_eq!(
        schema,
        "\"name\": schema.StringAttribute{\n\
         Computed: true,\nOptional: true,\n\
         Sensitive: true,\n\
         Description: \"the name\",\nMarkdownDescription: \"the name\",\n\
         DeprecationMessage: \"use label\",\n\
         PlanModifiers: []planmodifier.String{\nstringplanmodifier.UseStateForUnknown(),\n},\n\
         Default: stringdefault.StaticString(\"x\"),\n\
         },"
    );
}

#[test]
fn test_collection_schema_has_element_type() {
    let spec = CollectionAttribute::of(ElementType::List(Box::new(ElementType::String)));
    let element = GeneratorElement::set_attribute("tags", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("tags").unwrap(),
        "\"tags\": schema.SetAttribute{\nElementType: types.ListType{\nElemType: types.StringType,\n},\n},"
    );
}

#[test]
fn test_object_schema_and_imports() {
    let spec = ObjectAttribute {
        attribute_types: vec![
            ObjectAttributeType::new("name", ElementType::String),
            ObjectAttributeType::new("size", ElementType::Int64),
        ],
        ..Default::default()
    };
    let element = GeneratorElement::object_attribute("shape", Some(&spec)).unwrap();
    let schema = element.schema("shape").unwrap();
    assert!(schema
        .starts_with("\"shape\": schema.ObjectAttribute{\nAttributeTypes: map[string]attr.Type{\n"));
    assert!(schema.contains("\"name\": types.StringType,\n"));
    assert!(schema.contains("\"size\": types.Int64Type,\n"));
    let imports = element.imports();
    assert!(imports.contains(ATTR_IMPORT));
    assert!(imports.contains(TYPES_IMPORT));
}

#[test]
fn test_list_nested_attribute_schema() {
    let spec = NestedCollectionAttribute {
        nested_object: NestedAttributeObject {
            attributes: vec![bool_attr("flag", required())],
            ..Default::default()
        },
        computed_optional_required: Some(ComputedOptionalRequired::Optional),
        ..Default::default()
    };
    let element = GeneratorElement::list_nested_attribute("nested", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("nested").unwrap(),
        "\"nested\": schema.ListNestedAttribute{\n\
         NestedObject: schema.NestedAttributeObject{\n\
         Attributes: map[string]schema.Attribute{\n\
         \"flag\": schema.BoolAttribute{\nRequired: true,\n},\n\
         },\n\
         },\n\
         Optional: true,\n\
         },"
    );
}

#[test]
fn test_nested_object_decorators_use_object_stem() {
    let spec = NestedCollectionAttribute {
        nested_object: NestedAttributeObject {
            validators: vec![CustomExpression::new("objectvalidator.AlsoRequires()")],
            ..Default::default()
        },
        validators: vec![CustomExpression::new("listvalidator.SizeAtLeast(1)")],
        ..Default::default()
    };
    let schema = GeneratorElement::list_nested_attribute("items", Some(&spec))
        .unwrap()
        .schema("items")
        .unwrap();
    assert!(
        schema.contains("Validators: []validator.Object{\nobjectvalidator.AlsoRequires(),\n},\n},\n")
    );
    assert!(schema.contains("Validators: []validator.List{\nlistvalidator.SizeAtLeast(1),\n},\n"));
}

#[test]
fn test_single_nested_attribute_schema() {
    let spec = SingleNestedAttribute {
        attributes: vec![string_attr("id", PrimitiveAttribute::default())],
        computed_optional_required: Some(ComputedOptionalRequired::Required),
        ..Default::default()
    };
    let element = GeneratorElement::single_nested_attribute("config", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("config").unwrap(),
        "\"config\": schema.SingleNestedAttribute{\n\
         Attributes: map[string]schema.Attribute{\n\
         \"id\": schema.StringAttribute{\n},\n\
         },\n\
         Required: true,\n\
         },"
    );
}

#[test]
fn test_block_nesting_renders_blocks_map() {
    let spec = NestedCollectionBlock {
        nested_object: NestedBlockObject {
            blocks: vec![BlockSpec {
                single_nested: Some(SingleNestedBlock::default()),
                ..BlockSpec::named("inner")
            }],
            ..Default::default()
        },
        description: Some("outer block".into()),
        ..Default::default()
    };
    let element = GeneratorElement::list_nested_block("outer", Some(&spec)).unwrap();
    assert_eq!(element.role(), Role::Block);
    assert_eq!(
        element.schema("outer").unwrap(),
        "\"outer\": schema.ListNestedBlock{\n\
         NestedObject: schema.NestedBlockObject{\n\
         Attributes: map[string]schema.Attribute{\n\
         },\n\
         Blocks: map[string]schema.Block{\n\
         \"inner\": schema.SingleNestedBlock{\n\
         Attributes: map[string]schema.Attribute{\n\
         },\n\
         },\n\
         },\n\
         },\n\
         Description: \"outer block\",\nMarkdownDescription: \"outer block\",\n\
         },"
    );
}

#[test]
fn test_nested_children_sorted_by_name() {
    let spec = SingleNestedAttribute {
        attributes: vec![
            string_attr("zeta", PrimitiveAttribute::default()),
            string_attr("alpha", PrimitiveAttribute::default()),
        ],
        ..Default::default()
    };
    let schema = GeneratorElement::single_nested_attribute("s", Some(&spec))
        .unwrap()
        .schema("s")
        .unwrap();
    let alpha = schema.find("\"alpha\"").unwrap();
    let zeta = schema.find("\"zeta\"").unwrap();
    assert!(alpha < zeta);
}

// ---------------------------------------------------------------------------
// Invalid input
// ---------------------------------------------------------------------------

#[test]
fn test_nil_input_names_the_kind() {
    let err = GeneratorElement::int32_attribute("x", None).unwrap_err();
    assert_eq!(err, GenerateError::NilInput("int32 attribute"));
    assert_eq!(err.to_string(), "int32 attribute is nil");

    let err = GeneratorElement::set_nested_block("x", None).unwrap_err();
    assert_eq!(err.to_string(), "set nested block is nil");
}

#[test]
fn test_undefined_kind() {
    let err = GeneratorElement::from_attribute(&AttributeSpec::named("empty")).unwrap_err();
    assert_eq!(
        err,
        GenerateError::UndefinedKind {
            role: "attribute",
            name: "empty".into(),
        }
    );

    let err = GeneratorElement::from_block(&BlockSpec::named("empty_block")).unwrap_err();
    assert!(matches!(err, GenerateError::UndefinedKind { role: "block", .. }));
}

#[test]
fn test_ambiguous_kind_lists_selectors() {
    let spec = AttributeSpec {
        bool: Some(PrimitiveAttribute::default()),
        string: Some(PrimitiveAttribute::default()),
        ..AttributeSpec::named("both")
    };
    let err = GeneratorElement::from_attribute(&spec).unwrap_err();
    assert_eq!(
        err,
        GenerateError::AmbiguousKind {
            role: "attribute",
            name: "both".into(),
            kinds: "bool, string".into(),
        }
    );
}

#[test]
fn test_child_error_carries_parent_name() {
    let spec = AttributeSpec {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![AttributeSpec::named("child")],
            ..Default::default()
        }),
        ..AttributeSpec::named("parent")
    };
    let err = GeneratorElement::from_attribute(&spec).unwrap_err();
    assert_eq!(err.path(), vec!["parent"]);
    assert!(matches!(err.root(), GenerateError::UndefinedKind { name, .. } if name == "child"));
}

#[test]
fn test_static_default_must_match_kind() {
    let spec = PrimitiveAttribute {
        default: Some(DefaultValue {
            custom: None,
            static_value: Some(StaticDefault::String("5".into())),
        }),
        ..Default::default()
    };
    let err = GeneratorElement::from_attribute(&AttributeSpec {
        int64: Some(spec.clone()),
        ..AttributeSpec::named("count")
    })
    .unwrap_err();
    assert_eq!(err.path(), vec!["count"]);
    assert_eq!(
        err.root(),
        &GenerateError::MismatchedDefault {
            element: "int64 attribute",
            value: "string",
        }
    );
    assert_eq!(err.to_string(), "count: int64 attribute cannot take a string static default");

    assert!(GeneratorElement::string_attribute("count", Some(&spec)).is_ok());
}

#[test]
fn test_invalid_names_rejected() {
    let err = GeneratorElement::from_attribute(&bool_attr("Bad-Name", required())).unwrap_err();
    assert_eq!(
        err,
        GenerateError::InvalidName {
            role: "attribute",
            name: "Bad-Name".into(),
        }
    );

    let block = BlockSpec {
        single_nested: Some(SingleNestedBlock {
            attributes: vec![bool_attr("9lives", required())],
            ..Default::default()
        }),
        ..BlockSpec::named("outer")
    };
    let err = GeneratorElement::from_block(&block).unwrap_err();
    assert_eq!(err.path(), vec!["outer"]);
    assert_eq!(err.to_string(), "outer: attribute name \"9lives\" is not a valid identifier");
}

#[test]
fn test_dispatch_matches_direct_constructor() {
    let spec = bool_attr("flag", required());
    let dispatched = GeneratorElement::from_attribute(&spec).unwrap();
    let direct = GeneratorElement::bool_attribute("flag", spec.bool.as_ref()).unwrap();
    assert_eq!(dispatched, direct);
}

// ---------------------------------------------------------------------------
// Custom types and associations
// ---------------------------------------------------------------------------

#[test]
fn test_associated_primitive_derives_custom_type() {
    let spec = PrimitiveAttribute {
        associated_external_type: assoc("*apisdk.Type"),
        ..Default::default()
    };
    let element = GeneratorElement::int32_attribute("int32_attribute", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("int32_attribute").unwrap(),
        "\"int32_attribute\": schema.Int32Attribute{\nCustomType: Int32AttributeType{},\n},"
    );
    assert_eq!(
        element.model_field("int32_attribute").unwrap().value_type,
        "Int32AttributeValue"
    );
    assert_eq!(
        element.imports().paths(),
        vec![
            TYPES_IMPORT,
            FMT_IMPORT,
            DIAG_IMPORT,
            ATTR_IMPORT,
            TFTYPES_IMPORT,
            BASETYPES_IMPORT,
            APISDK,
        ]
    );

    let text = element.custom_type_and_value("int32_attribute", templates()).unwrap();
    assert!(text.contains("type Int32AttributeType struct {\n\tbasetypes.Int32Type\n}"));
    assert!(text.contains("type Int32AttributeValue struct {\n\tbasetypes.Int32Value\n}"));
}

#[test]
fn test_explicit_custom_type_wins_over_association() {
    let spec = PrimitiveAttribute {
        associated_external_type: assoc("*apisdk.Type"),
        custom_type: Some(CustomType {
            import: Some(Import::new("example.com/mytypes")),
            type_name: "mytypes.EmailType{}".into(),
            value_type: "mytypes.Email".into(),
        }),
        ..Default::default()
    };
    let element = GeneratorElement::string_attribute("email", Some(&spec)).unwrap();
    assert_eq!(
        element.schema("email").unwrap(),
        "\"email\": schema.StringAttribute{\nCustomType: mytypes.EmailType{},\n},"
    );
    assert_eq!(element.model_field("email").unwrap().value_type, "mytypes.Email");
    assert_eq!(
        element.imports().paths(),
        vec![
            "example.com/mytypes",
            TYPES_IMPORT,
            FMT_IMPORT,
            DIAG_IMPORT,
            ATTR_IMPORT,
            TFTYPES_IMPORT,
            BASETYPES_IMPORT,
            APISDK,
        ]
    );
    let functions = element.to_from_functions("email", templates()).unwrap();
    assert!(functions.contains("types.StringNull()"));
}

#[test]
fn test_explicit_custom_type_without_association_drops_types() {
    let spec = PrimitiveAttribute {
        custom_type: Some(CustomType {
            import: Some(Import::new("example.com/mytypes")),
            type_name: "mytypes.EmailType{}".into(),
            value_type: "mytypes.Email".into(),
        }),
        ..Default::default()
    };
    let element = GeneratorElement::string_attribute("email", Some(&spec)).unwrap();
    assert_eq!(element.imports().paths(), vec!["example.com/mytypes"]);
}

#[test]
fn test_associated_number_imports_math_big() {
    let spec = PrimitiveAttribute {
        associated_external_type: assoc("*apisdk.Amount"),
        ..Default::default()
    };
    let element = GeneratorElement::number_attribute("amount", Some(&spec)).unwrap();
    assert_eq!(
        element.imports().paths(),
        vec![
            TYPES_IMPORT,
            FMT_IMPORT,
            DIAG_IMPORT,
            ATTR_IMPORT,
            TFTYPES_IMPORT,
            BASETYPES_IMPORT,
            MATH_BIG_IMPORT,
            APISDK,
        ]
    );
    let functions = element.to_from_functions("amount", templates()).unwrap();
    assert!(functions.contains("a := apisdk.Amount(*v.ValueBigFloat())"));
    assert!(functions.contains("types.NumberValue((*big.Float)(apiObject))"));
}

#[test]
fn test_number_without_association_needs_no_math_big() {
    let element = GeneratorElement::number_attribute("amount", Some(&required())).unwrap();
    assert_eq!(element.imports().paths(), vec![TYPES_IMPORT]);
}

#[test]
fn test_model_field_defaults_to_framework_type() {
    let element = GeneratorElement::bool_attribute("is_enabled", Some(&required())).unwrap();
    let field = element.model_field("is_enabled").unwrap();
    assert_eq!(field.name, "IsEnabled");
    assert_eq!(field.tfsdk_name, "is_enabled");
    assert_eq!(field.value_type, "types.Bool");
}

#[test]
fn test_associated_collection_custom_type() {
    let spec = CollectionAttribute {
        associated_external_type: assoc("*apisdk.Tags"),
        ..CollectionAttribute::of(ElementType::String)
    };
    let element = GeneratorElement::list_attribute("tags", Some(&spec)).unwrap();
    assert!(element.schema("tags").unwrap().contains(
        "CustomType: TagsType{\nListType: basetypes.ListType{\nElemType: types.StringType,\n},\n},\n"
    ));
    let text = element.custom_type_and_value("tags", templates()).unwrap();
    assert!(text.contains("type TagsType struct {\n\tbasetypes.ListType\n}"));
}

#[test]
fn test_without_association_nothing_is_rendered() {
    let element = GeneratorElement::bool_attribute("flag", Some(&required())).unwrap();
    assert_eq!(element.custom_type_and_value("flag", templates()).unwrap(), "");
    assert_eq!(element.to_from_functions("flag", templates()).unwrap(), "");
}

#[test]
fn test_nested_association_lives_on_nested_object() {
    let spec = NestedCollectionAttribute {
        nested_object: NestedAttributeObject {
            attributes: vec![string_attr("id", PrimitiveAttribute::default())],
            associated_external_type: assoc("*apisdk.Item"),
            ..Default::default()
        },
        ..Default::default()
    };
    let element = GeneratorElement::list_nested_attribute("items", Some(&spec)).unwrap();
    assert_eq!(
        element.associated_external_type().map(|a| a.type_name()),
        Some("*apisdk.Item")
    );
    let schema = element.schema("items").unwrap();
    assert!(schema.contains(
        "CustomType: ItemsType{\nObjectType: types.ObjectType{\nAttrTypes: ItemsValue{}.AttributeTypes(ctx),\n},\n},\n"
    ));
    assert_eq!(element.model_field("items").unwrap().value_type, "types.List");

    let text = element.custom_type_and_value("items", templates()).unwrap();
    assert!(text.contains("type ItemsType struct {\n\tbasetypes.ObjectType\n}"));
}

#[test]
fn test_descendant_wrappers_rendered_without_parent_association() {
    let spec = SingleNestedAttribute {
        attributes: vec![string_attr(
            "id",
            PrimitiveAttribute {
                associated_external_type: assoc("*apisdk.Id"),
                ..Default::default()
            },
        )],
        ..Default::default()
    };
    let element = GeneratorElement::single_nested_attribute("outer", Some(&spec)).unwrap();
    let text = element.custom_type_and_value("outer", templates()).unwrap();
    assert!(text.contains("type IdType struct"));
    assert!(!text.contains("type OuterType struct"));
}

// ---------------------------------------------------------------------------
// Imports
// ---------------------------------------------------------------------------

#[test]
fn test_nested_imports_aggregate_children() {
    let spec = NestedCollectionAttribute {
        nested_object: NestedAttributeObject {
            attributes: vec![string_attr(
                "name",
                PrimitiveAttribute {
                    validators: vec![
                        CustomExpression::new("v.Check()").with_import("example.com/v"),
                    ],
                    ..Default::default()
                },
            )],
            ..Default::default()
        },
        ..Default::default()
    };
    let element = GeneratorElement::list_nested_attribute("items", Some(&spec)).unwrap();
    assert_eq!(
        element.imports().paths(),
        vec![TYPES_IMPORT, VALIDATOR_IMPORT, "example.com/v"]
    );
}

#[test]
fn test_empty_validator_definitions_add_no_package_import() {
    let spec = PrimitiveAttribute {
        validators: vec![CustomExpression::new("").with_import("example.com/only")],
        ..Default::default()
    };
    let element = GeneratorElement::string_attribute("s", Some(&spec)).unwrap();
    assert_eq!(element.imports().paths(), vec![TYPES_IMPORT, "example.com/only"]);
    assert_eq!(element.schema("s").unwrap(), "\"s\": schema.StringAttribute{\n},");
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn test_equality_ignores_declaration_order() {
    let forward = SingleNestedAttribute {
        attributes: vec![
            string_attr("a", PrimitiveAttribute::default()),
            bool_attr("b", required()),
        ],
        ..Default::default()
    };
    let reversed = SingleNestedAttribute {
        attributes: vec![
            bool_attr("b", required()),
            string_attr("a", PrimitiveAttribute::default()),
        ],
        ..Default::default()
    };
    let left = GeneratorElement::single_nested_attribute("obj", Some(&forward)).unwrap();
    let right = GeneratorElement::single_nested_attribute("obj", Some(&reversed)).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_equality_sees_deep_decorator_change() {
    let make = |sensitive| SingleNestedAttribute {
        attributes: vec![string_attr(
            "secret",
            PrimitiveAttribute {
                sensitive,
                ..Default::default()
            },
        )],
        ..Default::default()
    };
    let left = GeneratorElement::single_nested_attribute("obj", Some(&make(Some(true)))).unwrap();
    let right = GeneratorElement::single_nested_attribute("obj", Some(&make(None))).unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_equality_sees_missing_child() {
    let full = SingleNestedAttribute {
        attributes: vec![
            string_attr("a", PrimitiveAttribute::default()),
            string_attr("b", PrimitiveAttribute::default()),
        ],
        ..Default::default()
    };
    let partial = SingleNestedAttribute {
        attributes: vec![string_attr("a", PrimitiveAttribute::default())],
        ..Default::default()
    };
    let left = GeneratorElement::single_nested_attribute("obj", Some(&full)).unwrap();
    let right = GeneratorElement::single_nested_attribute("obj", Some(&partial)).unwrap();
    assert_ne!(left, right);
}

#[test]
fn test_duplicate_child_keeps_first() {
    let spec = SingleNestedAttribute {
        attributes: vec![
            bool_attr("dup", required()),
            string_attr("dup", PrimitiveAttribute::default()),
        ],
        ..Default::default()
    };
    let element = GeneratorElement::single_nested_attribute("obj", Some(&spec)).unwrap();
    let nested = element.nested().unwrap();
    assert_eq!(nested.attributes().len(), 1);
    assert_eq!(nested.attributes()["dup"].kind(), ElementKind::Bool);
}

// ---------------------------------------------------------------------------
// To / From
// ---------------------------------------------------------------------------

#[test]
fn test_primitive_conversion_uses_framework_accessors() {
    let element = GeneratorElement::int32_attribute("n", Some(&required())).unwrap();
    assert_eq!(element.to().unwrap(), ToFromConversion::Default("ValueInt32Pointer"));
    assert_eq!(element.from().unwrap(), ToFromConversion::Default("Int32PointerValue"));
}

#[test]
fn test_collection_conversion_carries_element_type() {
    let spec = CollectionAttribute::of(ElementType::String);
    let element = GeneratorElement::map_attribute("labels", Some(&spec)).unwrap();
    assert_eq!(
        element.to().unwrap(),
        ToFromConversion::Composite {
            accessor: "ElementsAs",
            element_type: "types.StringType".into(),
        }
    );
    assert_eq!(
        element.from().unwrap(),
        ToFromConversion::Composite {
            accessor: "MapValueFrom",
            element_type: "types.StringType".into(),
        }
    );
}

#[test]
fn test_association_conversion_delegates() {
    let spec = PrimitiveAttribute {
        associated_external_type: assoc("*apisdk.Type"),
        ..Default::default()
    };
    let element = GeneratorElement::bool_attribute("flag", Some(&spec)).unwrap();
    match element.to().unwrap() {
        ToFromConversion::Associated(assoc) => assert_eq!(assoc.to_pascal_case(), "ApisdkType"),
        other => panic!("expected associated conversion, got {other:?}"),
    }
}

#[test]
fn test_nested_collections_are_unimplemented() {
    let spec = NestedCollectionAttribute::default();
    let element = GeneratorElement::map_nested_attribute("m", Some(&spec)).unwrap();
    let err = element.to().unwrap_err();
    assert!(err.is_unimplemented());
    assert_eq!(err.to_string(), "map nested type is not yet implemented");

    let spec = SingleNestedAttribute::default();
    let element = GeneratorElement::single_nested_attribute("s", Some(&spec)).unwrap();
    assert_eq!(
        element.from().unwrap_err().to_string(),
        "single nested type is not yet implemented"
    );
}

#[test]
fn test_primitive_to_from_functions() {
    let spec = PrimitiveAttribute {
        associated_external_type: assoc("*apisdk.Type"),
        ..Default::default()
    };
    let element = GeneratorElement::int64_attribute("count", Some(&spec)).unwrap();
    let text = element.to_from_functions("count", templates()).unwrap();
    assert!(text.contains(
        "func (v CountValue) ToApisdkType(ctx context.Context) (*apisdk.Type, diag.Diagnostics) {"
    ));
    assert!(text.contains("a := apisdk.Type(*v.ValueInt64Pointer())"));
    assert!(text.contains("types.Int64PointerValue((*int64)(apiObject)),"));
}

#[test]
fn test_unimplemented_children_skipped_in_composite() {
    let spec = SingleNestedAttribute {
        attributes: vec![
            string_attr("name", PrimitiveAttribute::default()),
            map_nested_attr("items"),
        ],
        associated_external_type: assoc("*apisdk.Widget"),
        ..Default::default()
    };
    let element = GeneratorElement::single_nested_attribute("widget", Some(&spec)).unwrap();
    let text = element.to_from_functions("widget", templates()).unwrap();
    assert!(text.contains("func (v WidgetValue) ToApisdkWidget("));
    assert!(text.contains("a.Name = v.Name.ValueStringPointer()"));
    assert!(text.contains("Name: types.StringPointerValue(apiObject.Name),"));
    assert!(!text.contains("a.Items"));
    assert!(!text.contains("Items:"));
}

#[test]
fn test_attr_type_of_nested_children() {
    let spec = NestedCollectionAttribute {
        nested_object: NestedAttributeObject {
            attributes: vec![bool_attr("flag", required())],
            ..Default::default()
        },
        ..Default::default()
    };
    let element = GeneratorElement::set_nested_attribute("entries", Some(&spec)).unwrap();
    assert_eq!(
        element.attr_type("entries"),
        "basetypes.SetType{\nElemType: basetypes.ObjectType{\nAttrTypes: map[string]attr.Type{\n\"flag\": basetypes.BoolType{},\n},\n},\n}"
    );
    assert_eq!(element.attr_value("entries"), "basetypes.SetValue");
}

// ---------------------------------------------------------------------------
// Schema trees
// ---------------------------------------------------------------------------

fn surface(attributes: Vec<AttributeSpec>) -> SurfaceSchema {
    SurfaceSchema {
        attributes,
        ..Default::default()
    }
}

fn resource(attributes: Vec<AttributeSpec>) -> GeneratorSchema {
    GeneratorSchema::from_spec(Surface::Resource, &surface(attributes)).unwrap()
}

#[test]
fn test_schema_emit_wraps_function() {
    let schema = resource(vec![bool_attr("enabled", required())]);
    let output = schema.emit("widget", templates()).unwrap();
    assert!(output.schema.starts_with(
        "func WidgetResourceSchema(ctx context.Context) schema.Schema {\n\treturn schema.Schema{\n"
    ));
    assert!(output.schema.contains("\"enabled\": schema.BoolAttribute{\nRequired: true,\n},\n"));
    assert!(output.schema.ends_with("\t}\n}"));
    assert_eq!(
        output.model,
        "type WidgetModel struct {\n\tEnabled types.Bool `tfsdk:\"enabled\"`\n}"
    );
    assert_eq!(
        output.imports.paths(),
        vec!["context", Surface::Resource.schema_import(), TYPES_IMPORT]
    );
    assert!(output.custom_types.is_empty());
    assert!(output.to_from.is_empty());
}

#[test]
fn test_tree_drift() {
    let mut before = SchemaTree::new(Surface::Resource);
    before.insert("kept", resource(vec![bool_attr("a", required())]));
    before.insert("changed", resource(vec![bool_attr("a", required())]));
    before.insert("dropped", resource(Vec::new()));

    let mut after = SchemaTree::new(Surface::Resource);
    after.insert("kept", resource(vec![bool_attr("a", required())]));
    after.insert("changed", resource(vec![bool_attr("a", PrimitiveAttribute::default())]));
    after.insert("fresh", resource(Vec::new()));

    let drift = after.drift(&before);
    assert_eq!(
        drift,
        vec![
            Drift { name: "changed".into(), kind: DriftKind::Changed },
            Drift { name: "dropped".into(), kind: DriftKind::Removed },
            Drift { name: "fresh".into(), kind: DriftKind::Added },
        ]
    );
}

#[test]
fn test_failing_schema_does_not_affect_siblings() {
    let data_source = |attributes| {
        GeneratorSchema::from_spec(Surface::DataSource, &surface(attributes)).unwrap()
    };
    let mut tree = SchemaTree::new(Surface::DataSource);
    tree.insert("good", data_source(vec![bool_attr("a", required())]));
    let broken = SingleNestedAttribute {
        attributes: vec![string_attr(
            "id",
            PrimitiveAttribute {
                associated_external_type: assoc("*apisdk.Id"),
                ..Default::default()
            },
        )],
        ..Default::default()
    };
    tree.insert(
        "bad",
        data_source(vec![AttributeSpec {
            single_nested: Some(broken),
            ..AttributeSpec::named("outer")
        }]),
    );

    let mut overrides = std::collections::BTreeMap::new();
    overrides.insert("type".to_string(), "{{ undefined_helper() }}".to_string());
    let templates = Templates::with_overrides(&overrides).unwrap();
    let output = tree.emit_all(&templates);
    assert!(output.entries["good"].is_ok());
    let err = output.entries["bad"].as_ref().unwrap_err();
    assert_eq!(err.path(), vec!["outer", "id"]);
    assert!(matches!(err.root(), GenerateError::Render { .. }));
    assert_eq!(output.failures().count(), 1);
}

// ---------------------------------------------------------------------------
// Surfaces
// ---------------------------------------------------------------------------

fn static_string_default(value: &str) -> Option<DefaultValue> {
    Some(DefaultValue {
        custom: None,
        static_value: Some(StaticDefault::String(value.into())),
    })
}

#[test]
fn test_data_source_schema_text_and_imports() {
    let spec = surface(vec![
        string_attr(
            "id",
            PrimitiveAttribute {
                computed_optional_required: Some(ComputedOptionalRequired::Computed),
                ..Default::default()
            },
        ),
        string_attr("name", required()),
    ]);
    let schema = GeneratorSchema::from_spec(Surface::DataSource, &spec).unwrap();
    assert_eq!(schema.surface(), Surface::DataSource);
    let output = schema.emit("widget", templates()).unwrap();
    assert_eq!(
        output.schema,
        "func WidgetDataSourceSchema(ctx context.Context) schema.Schema {\n\treturn schema.Schema{\n\
         Attributes: map[string]schema.Attribute{\n\
         \"id\": schema.StringAttribute{\nComputed: true,\n},\n\
         \"name\": schema.StringAttribute{\nRequired: true,\n},\n\
         },\n\
         \t}\n}"
    );
    assert_eq!(
        output.imports.paths(),
        vec![
            "context",
            "github.com/hashicorp/terraform-plugin-framework/datasource/schema",
            TYPES_IMPORT,
        ]
    );
}

#[test]
fn test_provider_schema_text_and_imports() {
    let spec = SurfaceSchema {
        attributes: vec![string_attr(
            "endpoint",
            PrimitiveAttribute {
                computed_optional_required: Some(ComputedOptionalRequired::Optional),
                sensitive: Some(true),
                ..Default::default()
            },
        )],
        description: Some("Widget provider".into()),
        ..Default::default()
    };
    let output = GeneratorSchema::from_spec(Surface::Provider, &spec)
        .unwrap()
        .emit("widget", templates())
        .unwrap();
    assert_eq!(
        output.schema,
        "func WidgetProviderSchema(ctx context.Context) schema.Schema {\n\treturn schema.Schema{\n\
         Attributes: map[string]schema.Attribute{\n\
         \"endpoint\": schema.StringAttribute{\nOptional: true,\nSensitive: true,\n},\n\
         },\n\
         Description: \"Widget provider\",\n\
         MarkdownDescription: \"Widget provider\",\n\
         \t}\n}"
    );
    assert_eq!(
        output.imports.paths(),
        vec![
            "context",
            "github.com/hashicorp/terraform-plugin-framework/provider/schema",
            TYPES_IMPORT,
        ]
    );
}

#[test]
fn test_data_source_rejects_plan_modifiers() {
    let spec = surface(vec![string_attr(
        "name",
        PrimitiveAttribute {
            plan_modifiers: vec![CustomExpression::new("stringplanmodifier.UseStateForUnknown()")],
            ..Default::default()
        },
    )]);
    let err = GeneratorSchema::from_spec(Surface::DataSource, &spec).unwrap_err();
    assert_eq!(err.path(), vec!["name"]);
    assert_eq!(
        err.root(),
        &GenerateError::UnsupportedOnSurface {
            facet: "plan modifiers",
            surface: "data source",
        }
    );
    assert!(GeneratorSchema::from_spec(Surface::Resource, &spec).is_ok());
}

#[test]
fn test_data_source_rejects_defaults() {
    let spec = surface(vec![string_attr(
        "name",
        PrimitiveAttribute {
            default: static_string_default("x"),
            ..Default::default()
        },
    )]);
    let err = GeneratorSchema::from_spec(Surface::DataSource, &spec).unwrap_err();
    assert_eq!(err.to_string(), "name: default is not supported in data source schemas");
}

#[test]
fn test_nested_object_plan_modifiers_checked_against_surface() {
    let spec = surface(vec![AttributeSpec {
        list_nested: Some(NestedCollectionAttribute {
            nested_object: NestedAttributeObject {
                attributes: vec![string_attr("id", required())],
                plan_modifiers: vec![CustomExpression::new("listplanmodifier.RequiresReplace()")],
                ..Default::default()
            },
            ..Default::default()
        }),
        ..AttributeSpec::named("items")
    }]);
    let err = GeneratorSchema::from_spec(Surface::DataSource, &spec).unwrap_err();
    assert_eq!(err.path(), vec!["items"]);
    assert!(matches!(
        err.root(),
        GenerateError::UnsupportedOnSurface { facet: "plan modifiers", .. }
    ));
}

#[test]
fn test_provider_rejects_computed_descendant() {
    let spec = surface(vec![AttributeSpec {
        single_nested: Some(SingleNestedAttribute {
            attributes: vec![string_attr(
                "token",
                PrimitiveAttribute {
                    computed_optional_required: Some(ComputedOptionalRequired::ComputedOptional),
                    ..Default::default()
                },
            )],
            ..Default::default()
        }),
        ..AttributeSpec::named("auth")
    }]);
    let err = GeneratorSchema::from_spec(Surface::Provider, &spec).unwrap_err();
    assert_eq!(err.path(), vec!["auth", "token"]);
    assert_eq!(err.to_string(), "auth: token: computed is not supported in provider schemas");
    assert!(GeneratorSchema::from_spec(Surface::DataSource, &spec).is_ok());
}

#[test]
fn test_provider_rejects_defaults_and_plan_modifiers() {
    let with_default = surface(vec![string_attr(
        "region",
        PrimitiveAttribute {
            default: static_string_default("us-east-1"),
            ..Default::default()
        },
    )]);
    let err = GeneratorSchema::from_spec(Surface::Provider, &with_default).unwrap_err();
    assert!(matches!(err.root(), GenerateError::UnsupportedOnSurface { facet: "default", .. }));

    let with_modifier = surface(vec![string_attr(
        "region",
        PrimitiveAttribute {
            plan_modifiers: vec![CustomExpression::new("stringplanmodifier.RequiresReplace()")],
            ..Default::default()
        },
    )]);
    let err = GeneratorSchema::from_spec(Surface::Provider, &with_modifier).unwrap_err();
    assert!(matches!(
        err.root(),
        GenerateError::UnsupportedOnSurface { facet: "plan modifiers", surface: "provider" }
    ));
}

#[test]
fn test_surface_support_table() {
    assert!(Surface::Resource.allows_defaults());
    assert!(Surface::Resource.allows_plan_modifiers());
    assert!(Surface::Resource.allows_computed());
    assert!(!Surface::DataSource.allows_defaults());
    assert!(!Surface::DataSource.allows_plan_modifiers());
    assert!(Surface::DataSource.allows_computed());
    assert!(!Surface::Provider.allows_defaults());
    assert!(!Surface::Provider.allows_plan_modifiers());
    assert!(!Surface::Provider.allows_computed());
    assert_eq!(Surface::DataSource.to_string(), "data source");
}
