//! # Generator Module
//!
//! Turns a validated specification into Go source text for the Terraform
//! plugin framework: schema functions, model structs, wrapper types for
//! associated external types and the functions bridging the two.
//!
//! ## Architecture
//!
//! ```text
//! Specification → GeneratorElement (per attribute/block) → SchemaTree → SchemaOutput
//! ```
//!
//! 1. **Dispatch** - [`GeneratorElement::from_attribute`] and
//!    [`GeneratorElement::from_block`] pick a constructor from the single
//!    populated kind selector.
//! 2. **Kind table** - [`ElementKind::traits`] supplies everything that varies
//!    between kinds, so one implementation serves all fourteen.
//! 3. **Nesting** - [`NestedObject`] owns children by name and aggregates their
//!    schema text, imports and bridging code in sorted order.
//! 4. **Surface check** - [`GeneratorSchema::from_spec`] rejects defaults,
//!    plan modifiers and computed attributes on surfaces whose schema package
//!    has no field for them.
//! 5. **Emission** - [`SchemaTree::emit_all`] produces one [`SchemaOutput`] per
//!    schema; a failing schema does not affect its siblings.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tfgen::config::GeneratorConfig;
//! use tfgen::generator::Generator;
//!
//! let generator = Generator::new(GeneratorConfig::default());
//! let output = generator.generate(&specification)?;
//! for (name, schema) in output.resources.successes() {
//!     println!("{name}:\n{}\n{}", schema.imports, schema.schema);
//! }
//! ```
//!
//! ## Drift detection
//!
//! Elements compare structurally, children matched by name. Comparing a
//! freshly built tree against the previous one with [`SchemaTree::drift`]
//! lists the schemas that would regenerate differently.

mod conversion;
mod element;
mod element_type;
mod kind;
mod model;
mod nested;
mod schema;
mod templates;
#[cfg(test)]
mod tests;

pub use conversion::{AssocExtType, ToFromConversion};
pub use element::{GeneratorElement, Role, Shape};
pub use kind::{ElementKind, KindTraits, TemplateFamily};
pub use model::{model_struct, ModelField};
pub use nested::NestedObject;
pub use schema::{
    Drift, DriftKind, GeneratorSchema, SchemaOutput, SchemaTree, SchemaTrees, Surface, TreeOutput,
};
pub use templates::Templates;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::config::{load_generator_config, GeneratorConfig};
use crate::error::Result;
use crate::spec::Specification;

/// Entry point tying configuration, templates and schema trees together.
#[derive(Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
    /// Overridden templates; the built-in set when `None`
    templates: Option<Templates>,
}

/// Emission results of every surface of one specification.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    /// The trees that were emitted, kept for drift checks on the next run
    pub trees: SchemaTrees,
    pub provider: TreeOutput,
    pub resources: TreeOutput,
    pub data_sources: TreeOutput,
}

impl GenerationOutput {
    /// Number of schemas that failed across all surfaces.
    pub fn failure_count(&self) -> usize {
        [&self.provider, &self.resources, &self.data_sources]
            .iter()
            .map(|tree| tree.failures().count())
            .sum()
    }
}

impl Generator {
    /// A generator using the built-in templates.
    pub fn new(config: GeneratorConfig) -> Self {
        Generator {
            config,
            templates: None,
        }
    }

    /// Replace built-in templates by name.
    pub fn with_templates(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        self.templates = if overrides.is_empty() {
            None
        } else {
            Some(Templates::with_overrides(overrides)?)
        };
        Ok(self)
    }

    /// Build a generator from a `tfgen.toml` file, reading any template
    /// overrides it names. A missing file yields the default generator.
    pub fn from_config_file(path: &Path) -> anyhow::Result<Self> {
        let config = load_generator_config(path)?.unwrap_or_default();
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let sources = config.template_sources(base_dir)?;
        Ok(Generator::new(config).with_templates(&sources)?)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn templates(&self) -> Result<&Templates> {
        match &self.templates {
            Some(templates) => Ok(templates),
            None => Templates::builtin(),
        }
    }

    /// Build the schema trees of `spec` and emit each of them.
    ///
    /// Construction errors abort the run; emission errors are recorded per
    /// schema in the returned [`TreeOutput`]s.
    pub fn generate(&self, spec: &Specification) -> Result<GenerationOutput> {
        let templates = self.templates()?;
        let trees = SchemaTrees::from_specification(spec)?;
        let emit = |tree: &SchemaTree| {
            if self.config.parallel {
                tree.emit_all_parallel(templates)
            } else {
                tree.emit_all(templates)
            }
        };
        let output = GenerationOutput {
            provider: emit(&trees.provider),
            resources: emit(&trees.resources),
            data_sources: emit(&trees.data_sources),
            trees,
        };
        info!(
            resources = output.resources.entries.len(),
            data_sources = output.data_sources.entries.len(),
            failed = output.failure_count(),
            parallel = self.config.parallel,
            "generation finished"
        );
        Ok(output)
    }
}
