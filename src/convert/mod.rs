//! Decorators: the small optional facets attached to every generator element.
//!
//! Each decorator renders one schema fragment (possibly empty), reports the
//! imports that fragment needs and compares structurally via `PartialEq`.
//! Elements write their decorators in a fixed order so the emitted text is
//! byte-stable for identical input.

mod custom_type;
mod default;
mod expressions;
mod requiredness;
mod text;

pub use custom_type::{AssociatedCustomType, CustomTypeDecorator};
pub use default::DefaultDecorator;
pub use expressions::{PlanModifiers, Validators};
pub use requiredness::Requiredness;
pub use text::{DeprecationMessage, Description, Sensitive};

use crate::imports::ImportSet;

/// Read-only contract every decorator offers to the generator.
pub trait Decorator: PartialEq {
    /// Schema fragment lines, each terminated by `,\n`. Empty when the facet is unset.
    fn schema(&self) -> String;

    /// Imports required by [`Decorator::schema`].
    fn imports(&self) -> ImportSet {
        ImportSet::new()
    }
}
