//! # tfgen
//!
//! **tfgen** is the schema generation engine behind a Terraform plugin
//! framework code generator. It takes an already validated, strongly typed
//! specification of providers, resources and data sources and emits Go source
//! text: schema functions, model structs, wrapper types for associated
//! external types and the functions converting between the two.
//!
//! ## Architecture
//!
//! - **[`spec`]** - The input contract: plain structs handed over by the specification loader
//! - **[`convert`]** - Decorators rendering the optional facets of an element
//!   (requiredness, custom type, default, description, validators, ...)
//! - **[`generator`]** - Kind dispatch, nested aggregation, templates and schema trees
//! - **[`imports`]** - Ordered, de-duplicated import sets
//! - **[`identifier`]** - Schema names and their Go spellings
//! - **[`error`]** - The error taxonomy shared by every stage
//! - **[`config`]** - Optional `tfgen.toml` settings
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Gen as generator::Generator
//!     participant Trees as generator::SchemaTrees
//!     participant Element as generator::GeneratorElement
//!     participant Tpl as generator::Templates
//!
//!     Caller->>Gen: generate(&Specification)
//!     Gen->>Trees: from_specification(spec)
//!     Trees->>Element: from_attribute / from_block (per node)
//!     Element->>Element: recurse into nested children
//!     Element-->>Trees: GeneratorElement
//!     Gen->>Trees: emit_all / emit_all_parallel
//!     Trees->>Element: schema, model_field, imports
//!     Trees->>Element: custom_type_and_value, to_from_functions
//!     Element->>Tpl: render(name, context)
//!     Tpl-->>Element: Go text
//!     Trees-->>Gen: TreeOutput per surface
//!     Gen-->>Caller: GenerationOutput
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tfgen::generator::GeneratorElement;
//! use tfgen::spec::{ComputedOptionalRequired, PrimitiveAttribute};
//!
//! let spec = PrimitiveAttribute {
//!     computed_optional_required: Some(ComputedOptionalRequired::Required),
//!     ..Default::default()
//! };
//! let element = GeneratorElement::bool_attribute("enabled", Some(&spec)).unwrap();
//! assert_eq!(
//!     element.schema("enabled").unwrap(),
//!     "\"enabled\": schema.BoolAttribute{\nRequired: true,\n},"
//! );
//! ```
//!
//! ## Determinism
//!
//! Children are held in sorted maps and import sets keep first-insertion
//! order, so generating twice from the same specification yields
//! byte-identical text, including when schemas are emitted in parallel.

pub mod config;
pub mod convert;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod imports;
pub mod logging;
pub mod spec;

pub use error::{GenerateError, Result};
