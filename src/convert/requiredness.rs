use super::Decorator;
use crate::spec::ComputedOptionalRequired;

/// Computed / optional / required markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requiredness(Option<ComputedOptionalRequired>);

impl Requiredness {
    pub fn new(value: Option<ComputedOptionalRequired>) -> Self {
        Requiredness(value)
    }

    pub fn value(&self) -> Option<ComputedOptionalRequired> {
        self.0
    }

    /// `Computed` or `ComputedOptional`.
    pub fn is_computed(&self) -> bool {
        matches!(
            self.0,
            Some(ComputedOptionalRequired::Computed | ComputedOptionalRequired::ComputedOptional)
        )
    }
}

impl Decorator for Requiredness {
    fn schema(&self) -> String {
        match self.0 {
            Some(ComputedOptionalRequired::Computed) => "Computed: true,\n".to_string(),
            Some(ComputedOptionalRequired::ComputedOptional) => {
                "Computed: true,\nOptional: true,\n".to_string()
            }
            Some(ComputedOptionalRequired::Optional) => "Optional: true,\n".to_string(),
            Some(ComputedOptionalRequired::Required) => "Required: true,\n".to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_markers() {
        use ComputedOptionalRequired::*;
        assert_eq!(Requiredness::new(Some(Required)).schema(), "Required: true,\n");
        assert_eq!(Requiredness::new(Some(Optional)).schema(), "Optional: true,\n");
        assert_eq!(Requiredness::new(Some(Computed)).schema(), "Computed: true,\n");
        assert_eq!(
            Requiredness::new(Some(ComputedOptional)).schema(),
            "Computed: true,\nOptional: true,\n"
        );
        assert_eq!(Requiredness::new(None).schema(), "");
        assert!(Requiredness::new(Some(Required)).imports().is_empty());
    }

    #[test]
    fn test_is_computed() {
        use ComputedOptionalRequired::*;
        assert!(Requiredness::new(Some(Computed)).is_computed());
        assert!(Requiredness::new(Some(ComputedOptional)).is_computed());
        assert!(!Requiredness::new(Some(Optional)).is_computed());
        assert!(!Requiredness::new(None).is_computed());
    }
}
