#![allow(dead_code)]

use tfgen::imports::Import;
use tfgen::spec::{
    AssociatedExternalType, AttributeSpec, BlockSpec, CollectionAttribute, ComputedOptionalRequired,
    CustomExpression, DataSource, DefaultValue, ElementType, NestedAttributeObject,
    NestedBlockObject, NestedCollectionAttribute, NestedCollectionBlock, PrimitiveAttribute,
    Provider, Resource, SingleNestedAttribute, Specification, StaticDefault, SurfaceSchema,
};

pub const APISDK: &str = "example.com/apisdk";

pub fn primitive(requiredness: ComputedOptionalRequired) -> PrimitiveAttribute {
    PrimitiveAttribute {
        computed_optional_required: Some(requiredness),
        ..Default::default()
    }
}

pub fn associated(type_name: &str) -> Option<AssociatedExternalType> {
    Some(AssociatedExternalType {
        import: Some(Import::new(APISDK)),
        type_name: type_name.to_string(),
    })
}

pub fn string_attr(name: &str) -> AttributeSpec {
    AttributeSpec {
        string: Some(primitive(ComputedOptionalRequired::Optional)),
        ..AttributeSpec::named(name)
    }
}

pub fn int64_attr(name: &str) -> AttributeSpec {
    AttributeSpec {
        int64: Some(primitive(ComputedOptionalRequired::Computed)),
        ..AttributeSpec::named(name)
    }
}

/// A resource schema touching every attribute family plus a nested block.
pub fn widget_schema() -> SurfaceSchema {
    SurfaceSchema {
        attributes: vec![
            AttributeSpec {
                bool: Some(PrimitiveAttribute {
                    default: Some(DefaultValue {
                        custom: None,
                        static_value: Some(StaticDefault::Bool(true)),
                    }),
                    ..primitive(ComputedOptionalRequired::ComputedOptional)
                }),
                ..AttributeSpec::named("enabled")
            },
            AttributeSpec {
                string: Some(PrimitiveAttribute {
                    validators: vec![CustomExpression::new("stringvalidator.LengthAtLeast(1)")
                        .with_import(
                            "github.com/hashicorp/terraform-plugin-framework-validators/stringvalidator",
                        )],
                    ..primitive(ComputedOptionalRequired::Required)
                }),
                ..AttributeSpec::named("name")
            },
            AttributeSpec {
                list: Some(CollectionAttribute {
                    computed_optional_required: Some(ComputedOptionalRequired::Optional),
                    ..CollectionAttribute::of(ElementType::String)
                }),
                ..AttributeSpec::named("tags")
            },
            AttributeSpec {
                list_nested: Some(NestedCollectionAttribute {
                    nested_object: NestedAttributeObject {
                        attributes: vec![string_attr("port_name"), int64_attr("number")],
                        ..Default::default()
                    },
                    computed_optional_required: Some(ComputedOptionalRequired::Optional),
                    ..Default::default()
                }),
                ..AttributeSpec::named("ports")
            },
            AttributeSpec {
                single_nested: Some(SingleNestedAttribute {
                    attributes: vec![string_attr("region"), int64_attr("zone_count")],
                    associated_external_type: associated("*apisdk.Placement"),
                    computed_optional_required: Some(ComputedOptionalRequired::Optional),
                    ..Default::default()
                }),
                ..AttributeSpec::named("placement")
            },
        ],
        blocks: vec![BlockSpec {
            set_nested: Some(NestedCollectionBlock {
                nested_object: NestedBlockObject {
                    attributes: vec![string_attr("key")],
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..BlockSpec::named("labels")
        }],
        description: Some("Manages a widget.".into()),
        ..Default::default()
    }
}

pub fn specification() -> Specification {
    Specification {
        provider: Some(Provider {
            name: "acme".into(),
            schema: Some(SurfaceSchema {
                attributes: vec![string_attr("endpoint")],
                ..Default::default()
            }),
        }),
        resources: vec![
            Resource {
                name: "widget".into(),
                schema: Some(widget_schema()),
            },
            Resource {
                name: "gadget".into(),
                schema: Some(SurfaceSchema {
                    attributes: vec![int64_attr("id"), string_attr("label")],
                    ..Default::default()
                }),
            },
            Resource {
                name: "placeholder".into(),
                schema: None,
            },
        ],
        data_sources: vec![DataSource {
            name: "widget".into(),
            schema: Some(SurfaceSchema {
                attributes: vec![string_attr("name")],
                ..Default::default()
            }),
        }],
    }
}
