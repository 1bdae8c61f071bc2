//! Schema trees: one generated schema per provider, resource or data source.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::element::GeneratorElement;
use super::model::{model_struct, ModelField};
use super::nested::{build_attributes, build_blocks};
use super::templates::Templates;
use crate::convert::{Decorator, DeprecationMessage};
use crate::error::{GenerateError, Result};
use crate::identifier::{quote, to_pascal_case};
use crate::imports::{ImportSet, CONTEXT_IMPORT};
use crate::spec::{Specification, SurfaceSchema};

/// The logical surface a schema is exposed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Provider,
    Resource,
    DataSource,
}

impl Surface {
    /// Framework package providing `schema.Schema` for this surface.
    pub fn schema_import(self) -> &'static str {
        match self {
            Surface::Provider => "github.com/hashicorp/terraform-plugin-framework/provider/schema",
            Surface::Resource => "github.com/hashicorp/terraform-plugin-framework/resource/schema",
            Surface::DataSource => {
                "github.com/hashicorp/terraform-plugin-framework/datasource/schema"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Provider => "provider",
            Surface::Resource => "resource",
            Surface::DataSource => "data source",
        }
    }

    /// Only resource schemas carry static or custom defaults.
    pub fn allows_defaults(self) -> bool {
        self == Surface::Resource
    }

    /// Only resource schemas carry plan modifiers, on elements and nested objects alike.
    pub fn allows_plan_modifiers(self) -> bool {
        self == Surface::Resource
    }

    /// Provider schemas have no computed attributes.
    pub fn allows_computed(self) -> bool {
        self != Surface::Provider
    }

    fn suffix(self) -> &'static str {
        match self {
            Surface::Provider => "Provider",
            Surface::Resource => "Resource",
            Surface::DataSource => "DataSource",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The generated form of one surface schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSchema {
    surface: Surface,
    attributes: BTreeMap<String, GeneratorElement>,
    blocks: BTreeMap<String, GeneratorElement>,
    description: Option<String>,
    markdown_description: Option<String>,
    deprecation_message: DeprecationMessage,
}

/// Everything emitted for one schema, handed to the writer as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaOutput {
    /// `func XResourceSchema(ctx context.Context) schema.Schema {...}`
    pub schema: String,
    /// `type XModel struct {...}`
    pub model: String,
    pub model_fields: Vec<ModelField>,
    pub imports: ImportSet,
    /// Wrapper type and value text keyed by top-level element name
    pub custom_types: BTreeMap<String, String>,
    /// Bridging function text keyed by top-level element name
    pub to_from: BTreeMap<String, String>,
}

impl GeneratorSchema {
    /// Build the elements of `spec` and check each of them against what the
    /// surface's schema package supports.
    pub fn from_spec(surface: Surface, spec: &SurfaceSchema) -> Result<Self> {
        let schema = GeneratorSchema {
            surface,
            attributes: build_attributes(&spec.attributes)?,
            blocks: build_blocks(&spec.blocks)?,
            description: spec.description.clone(),
            markdown_description: spec.markdown_description.clone(),
            deprecation_message: DeprecationMessage::new(spec.deprecation_message.clone()),
        };
        for (name, element) in schema.elements() {
            element.check_surface(surface).map_err(|e| e.in_element(name))?;
        }
        Ok(schema)
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn attributes(&self) -> &BTreeMap<String, GeneratorElement> {
        &self.attributes
    }

    pub fn blocks(&self) -> &BTreeMap<String, GeneratorElement> {
        &self.blocks
    }

    /// Attributes then blocks, each sorted by name.
    pub fn elements(&self) -> impl Iterator<Item = (&str, &GeneratorElement)> {
        self.attributes
            .iter()
            .chain(self.blocks.iter())
            .map(|(name, element)| (name.as_str(), element))
    }

    /// Imports of every element, in element order.
    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        for (_, element) in self.elements() {
            imports.merge(&element.imports());
        }
        imports
    }

    pub fn model_fields(&self) -> Result<Vec<ModelField>> {
        self.elements()
            .map(|(name, element)| element.model_field(name).map_err(|e| e.in_element(name)))
            .collect()
    }

    fn text_schema(&self) -> String {
        let mut out = String::new();
        if let Some(description) = &self.description {
            out.push_str(&format!("Description: {},\n", quote(description)));
        }
        if let Some(markdown) = self.markdown_description.as_ref().or(self.description.as_ref()) {
            out.push_str(&format!("MarkdownDescription: {},\n", quote(markdown)));
        }
        out.push_str(&self.deprecation_message.schema());
        out
    }

    /// Emit everything for this schema. Any element failure fails the whole
    /// schema so no partial text is handed on.
    pub fn emit(&self, name: &str, templates: &Templates) -> Result<SchemaOutput> {
        let surface = self.surface;
        let pascal = to_pascal_case(name);

        let mut schema = format!(
            "func {pascal}{}Schema(ctx context.Context) schema.Schema {{\n\treturn schema.Schema{{\n",
            surface.suffix()
        );
        schema.push_str("Attributes: map[string]schema.Attribute{\n");
        for (child, attribute) in &self.attributes {
            let text = attribute.schema(child).map_err(|e| e.in_element(child.as_str()))?;
            schema.push_str(&text);
            schema.push('\n');
        }
        schema.push_str("},\n");
        if !self.blocks.is_empty() {
            schema.push_str("Blocks: map[string]schema.Block{\n");
            for (child, block) in &self.blocks {
                let text = block.schema(child).map_err(|e| e.in_element(child.as_str()))?;
                schema.push_str(&text);
                schema.push('\n');
            }
            schema.push_str("},\n");
        }
        schema.push_str(&self.text_schema());
        schema.push_str("\t}\n}");

        let model_fields = self.model_fields()?;
        let model = model_struct(&format!("{pascal}Model"), &model_fields);

        let mut imports = ImportSet::new();
        imports.add_path(CONTEXT_IMPORT);
        imports.add_path(surface.schema_import());
        imports.merge(&self.imports());

        let mut custom_types = BTreeMap::new();
        let mut to_from = BTreeMap::new();
        for (child, element) in self.elements() {
            let text = element
                .custom_type_and_value(child, templates)
                .map_err(|e| e.in_element(child))?;
            if !text.is_empty() {
                custom_types.insert(child.to_string(), text);
            }
            let text = element
                .to_from_functions(child, templates)
                .map_err(|e| e.in_element(child))?;
            if !text.is_empty() {
                to_from.insert(child.to_string(), text);
            }
        }

        debug!(schema = name, surface = %surface, elements = model_fields.len(), "emitted schema");
        Ok(SchemaOutput {
            schema,
            model,
            model_fields,
            imports,
            custom_types,
            to_from,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftKind {
    Added,
    Removed,
    Changed,
}

/// A schema that differs between two generations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drift {
    pub name: String,
    pub kind: DriftKind,
}

/// Results of emitting every schema of a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeOutput {
    pub entries: BTreeMap<String, Result<SchemaOutput>>,
    /// Imports of the successful entries, merged in name order
    pub imports: ImportSet,
}

impl TreeOutput {
    fn from_results(results: Vec<(String, Result<SchemaOutput>)>) -> Self {
        let mut imports = ImportSet::new();
        for (_, output) in &results {
            if let Ok(output) = output {
                imports.merge(&output.imports);
            }
        }
        TreeOutput {
            entries: results.into_iter().collect(),
            imports,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &GenerateError)> {
        self.entries
            .iter()
            .filter_map(|(name, result)| result.as_ref().err().map(|e| (name.as_str(), e)))
    }

    pub fn successes(&self) -> impl Iterator<Item = (&str, &SchemaOutput)> {
        self.entries
            .iter()
            .filter_map(|(name, result)| result.as_ref().ok().map(|o| (name.as_str(), o)))
    }
}

/// All schemas of one surface, keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTree {
    surface: Surface,
    schemas: BTreeMap<String, GeneratorSchema>,
}

impl SchemaTree {
    pub fn new(surface: Surface) -> Self {
        SchemaTree {
            surface,
            schemas: BTreeMap::new(),
        }
    }

    /// Build a tree from named surface schemas. Entries without a schema are
    /// skipped; the first entry that fails to build aborts with its name.
    pub fn from_entries<'a, I>(surface: Surface, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a SurfaceSchema>)>,
    {
        let mut tree = SchemaTree::new(surface);
        for (name, schema) in entries {
            let Some(schema) = schema else {
                debug!(schema = name, surface = %surface, "no schema defined, skipping");
                continue;
            };
            let schema =
                GeneratorSchema::from_spec(surface, schema).map_err(|e| e.in_element(name))?;
            if tree.insert(name, schema).is_some() {
                warn!(
                    schema = name,
                    surface = %surface,
                    "duplicate schema name, keeping last definition"
                );
            }
        }
        Ok(tree)
    }

    /// Add or replace a schema. The schema keeps the surface it was built for.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        schema: GeneratorSchema,
    ) -> Option<GeneratorSchema> {
        self.schemas.insert(name.into(), schema)
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn schemas(&self) -> &BTreeMap<String, GeneratorSchema> {
        &self.schemas
    }

    pub fn get(&self, name: &str) -> Option<&GeneratorSchema> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Emit every schema in name order. A failing entry leaves its siblings untouched.
    pub fn emit_all(&self, templates: &Templates) -> TreeOutput {
        let results = self
            .schemas
            .iter()
            .map(|(name, schema)| (name.clone(), schema.emit(name, templates)))
            .collect();
        self.finish(TreeOutput::from_results(results))
    }

    /// Same as [`SchemaTree::emit_all`] with one worker per schema.
    ///
    /// Results are collected in name order before imports are merged, so the
    /// output is identical to the sequential form.
    pub fn emit_all_parallel(&self, templates: &Templates) -> TreeOutput {
        let entries: Vec<(&String, &GeneratorSchema)> = self.schemas.iter().collect();
        let results = entries
            .par_iter()
            .map(|(name, schema)| ((*name).clone(), schema.emit(name, templates)))
            .collect();
        self.finish(TreeOutput::from_results(results))
    }

    fn finish(&self, output: TreeOutput) -> TreeOutput {
        for (name, err) in output.failures() {
            warn!(schema = name, surface = %self.surface, error = %err, "schema generation failed");
        }
        info!(
            surface = %self.surface,
            schemas = output.entries.len(),
            failed = output.failures().count(),
            "emitted schema tree"
        );
        output
    }

    /// Schemas added, removed or changed relative to a previous generation, by name.
    pub fn drift(&self, previous: &SchemaTree) -> Vec<Drift> {
        let names: BTreeSet<&String> = self.schemas.keys().chain(previous.schemas.keys()).collect();
        names
            .into_iter()
            .filter_map(|name| {
                let kind = match (self.schemas.get(name), previous.schemas.get(name)) {
                    (Some(_), None) => DriftKind::Added,
                    (None, Some(_)) => DriftKind::Removed,
                    (Some(current), Some(before)) if current != before => DriftKind::Changed,
                    _ => return None,
                };
                Some(Drift {
                    name: name.clone(),
                    kind,
                })
            })
            .collect()
    }
}

/// The provider, resource and data source trees of one specification.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTrees {
    pub provider: SchemaTree,
    pub resources: SchemaTree,
    pub data_sources: SchemaTree,
}

impl SchemaTrees {
    pub fn from_specification(spec: &Specification) -> Result<Self> {
        let provider = SchemaTree::from_entries(
            Surface::Provider,
            spec.provider
                .iter()
                .map(|p| (p.name.as_str(), p.schema.as_ref())),
        )?;
        let resources = SchemaTree::from_entries(
            Surface::Resource,
            spec.resources.iter().map(|r| (r.name.as_str(), r.schema.as_ref())),
        )?;
        let data_sources = SchemaTree::from_entries(
            Surface::DataSource,
            spec.data_sources.iter().map(|d| (d.name.as_str(), d.schema.as_ref())),
        )?;
        Ok(SchemaTrees {
            provider,
            resources,
            data_sources,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaTree> {
        [&self.provider, &self.resources, &self.data_sources].into_iter()
    }
}
