//! Error taxonomy for schema generation.
//!
//! Three kinds of failure exist:
//!
//! - **Invalid input**: a missing specification node, a kind selector set
//!   with zero or several entries populated, a name that is not a valid schema
//!   key, a static default of the wrong type, or a facet the schema's surface
//!   does not support.
//! - **Unimplemented**: a kind that cannot produce a bridging conversion. Callers
//!   can test for it with [`GenerateError::is_unimplemented`] and skip instead of
//!   aborting the whole run.
//! - **Render**: a template failed to parse or execute.
//!
//! Errors raised below an element are wrapped with [`GenerateError::Element`] on
//! the way up so the offending node can be identified by name.

use thiserror::Error;

/// Result alias used throughout the generator.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

/// Failure raised while constructing or emitting generator elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A specification node was absent where one was required.
    #[error("{0} is nil")]
    NilInput(&'static str),

    /// None of the kind selectors were populated.
    #[error("{role} type not defined: {name:?}")]
    UndefinedKind {
        /// `attribute` or `block`
        role: &'static str,
        /// Specification name of the node
        name: String,
    },

    /// More than one kind selector was populated.
    #[error("{role} {name:?} defines more than one type: {kinds}")]
    AmbiguousKind {
        /// `attribute` or `block`
        role: &'static str,
        /// Specification name of the node
        name: String,
        /// Comma separated list of the populated selectors
        kinds: String,
    },

    /// A name that is not lower snake case.
    #[error("{role} name {name:?} is not a valid identifier")]
    InvalidName {
        /// `attribute` or `block`
        role: &'static str,
        name: String,
    },

    /// A static default whose value type differs from the element's kind.
    #[error("{element} cannot take a {value} static default")]
    MismatchedDefault {
        /// Label of the element kind, e.g. `int64 attribute`
        element: &'static str,
        /// Type of the supplied value, e.g. `string`
        value: &'static str,
    },

    /// A facet that the schema's surface has no field for.
    #[error("{facet} is not supported in {surface} schemas")]
    UnsupportedOnSurface {
        /// `default`, `plan modifiers` or `computed`
        facet: &'static str,
        /// `provider` or `data source`
        surface: &'static str,
    },

    /// The element kind has no bridging conversion.
    #[error("{0} is not yet implemented")]
    Unimplemented(String),

    /// A template failed to parse or render.
    #[error("template {template:?} failed: {message}")]
    Render {
        /// Name of the template
        template: String,
        /// Message reported by the template engine
        message: String,
    },

    /// Error raised while processing a named element.
    #[error("{name}: {source}")]
    Element {
        /// Name of the element that failed
        name: String,
        /// Underlying failure
        #[source]
        source: Box<GenerateError>,
    },
}

impl GenerateError {
    /// Wrap this error with the name of the element being processed.
    pub fn in_element(self, name: impl Into<String>) -> Self {
        GenerateError::Element {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// True when the root cause is an [`GenerateError::Unimplemented`] limitation.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self.root(), GenerateError::Unimplemented(_))
    }

    /// The innermost error, with all element context removed.
    pub fn root(&self) -> &GenerateError {
        let mut current = self;
        while let GenerateError::Element { source, .. } = current {
            current = source;
        }
        current
    }

    /// Element names from the outermost to the innermost context.
    pub fn path(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = self;
        while let GenerateError::Element { name, source } = current {
            names.push(name.as_str());
            current = source;
        }
        names
    }

    pub(crate) fn render(template: &str, err: impl std::fmt::Display) -> Self {
        GenerateError::Render {
            template: template.to_string(),
            message: err.to_string(),
        }
    }
}
