use super::Decorator;
use crate::imports::{Import, ImportSet, PLAN_MODIFIER_IMPORT, VALIDATOR_IMPORT};
use crate::spec::CustomExpression;

/// An ordered list of caller-supplied expressions rendered as one Go slice literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ExpressionList {
    element_type: String,
    expressions: Vec<CustomExpression>,
}

impl ExpressionList {
    fn definitions(&self) -> impl Iterator<Item = &str> {
        self.expressions
            .iter()
            .map(|e| e.schema_definition.as_str())
            .filter(|d| !d.is_empty())
    }

    fn schema(&self, field: &str) -> String {
        let mut body = String::new();
        for definition in self.definitions() {
            body.push_str(definition);
            body.push_str(",\n");
        }
        if body.is_empty() {
            return body;
        }
        format!("{field}: []{}{{\n{body}}},\n", self.element_type)
    }

    fn imports(&self, package: &str) -> ImportSet {
        let mut imports = ImportSet::new();
        if self.definitions().next().is_some() {
            imports.add(Import::new(package));
        }
        for expression in &self.expressions {
            imports.extend(expression.imports.iter().cloned());
        }
        imports
    }
}

/// `Validators: []validator.<Kind>{...}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validators(ExpressionList);

impl Validators {
    /// `kind` is the framework type stem, e.g. `Int32` or `Object`.
    pub fn new(kind: &str, expressions: Vec<CustomExpression>) -> Self {
        Validators(ExpressionList {
            element_type: format!("validator.{kind}"),
            expressions,
        })
    }
}

impl Decorator for Validators {
    fn schema(&self) -> String {
        self.0.schema("Validators")
    }

    fn imports(&self) -> ImportSet {
        self.0.imports(VALIDATOR_IMPORT)
    }
}

/// `PlanModifiers: []planmodifier.<Kind>{...}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanModifiers(ExpressionList);

impl PlanModifiers {
    pub fn new(kind: &str, expressions: Vec<CustomExpression>) -> Self {
        PlanModifiers(ExpressionList {
            element_type: format!("planmodifier.{kind}"),
            expressions,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.expressions.is_empty()
    }
}

impl Decorator for PlanModifiers {
    fn schema(&self) -> String {
        self.0.schema("PlanModifiers")
    }

    fn imports(&self) -> ImportSet {
        self.0.imports(PLAN_MODIFIER_IMPORT)
    }
}
