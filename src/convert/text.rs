use super::Decorator;
use crate::identifier::quote;

/// Human readable description, emitted as both plain and markdown text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description(Option<String>);

impl Description {
    pub fn new(value: Option<String>) -> Self {
        Description(value)
    }
}

impl Decorator for Description {
    fn schema(&self) -> String {
        match &self.0 {
            Some(text) => {
                let quoted = quote(text);
                format!("Description: {quoted},\nMarkdownDescription: {quoted},\n")
            }
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecationMessage(Option<String>);

impl DeprecationMessage {
    pub fn new(value: Option<String>) -> Self {
        DeprecationMessage(value)
    }
}

impl Decorator for DeprecationMessage {
    fn schema(&self) -> String {
        match &self.0 {
            Some(text) => format!("DeprecationMessage: {},\n", quote(text)),
            None => String::new(),
        }
    }
}

/// Only an explicit `true` is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sensitive(Option<bool>);

impl Sensitive {
    pub fn new(value: Option<bool>) -> Self {
        Sensitive(value)
    }
}

impl Decorator for Sensitive {
    fn schema(&self) -> String {
        if self.0 == Some(true) {
            "Sensitive: true,\n".to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_emits_both_forms() {
        let d = Description::new(Some("description".into()));
        assert_eq!(
            d.schema(),
            "Description: \"description\",\nMarkdownDescription: \"description\",\n"
        );
        assert_eq!(Description::new(None).schema(), "");
    }

    #[test]
    fn test_deprecation_message() {
        let d = DeprecationMessage::new(Some("deprecated".into()));
        assert_eq!(d.schema(), "DeprecationMessage: \"deprecated\",\n");
    }

    #[test]
    fn test_sensitive_only_when_true() {
        assert_eq!(Sensitive::new(Some(true)).schema(), "Sensitive: true,\n");
        assert_eq!(Sensitive::new(Some(false)).schema(), "");
        assert_eq!(Sensitive::new(None).schema(), "");
    }
}
