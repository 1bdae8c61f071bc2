use serde::Serialize;

/// One field of a generated model struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelField {
    /// Pascal case Go field name
    pub name: String,
    /// Original schema key, used for the `tfsdk` struct tag
    pub tfsdk_name: String,
    /// Go type, e.g. `types.Int32` or a custom value type
    pub value_type: String,
}

impl ModelField {
    /// `Name types.String `tfsdk:"name"``
    pub fn to_go(&self) -> String {
        format!("{} {} `tfsdk:\"{}\"`", self.name, self.value_type, self.tfsdk_name)
    }
}

/// A Go struct declaration holding one field per element, in the given order.
pub fn model_struct(type_name: &str, fields: &[ModelField]) -> String {
    let mut out = format!("type {type_name} struct {{\n");
    for field in fields {
        out.push('\t');
        out.push_str(&field.to_go());
        out.push('\n');
    }
    out.push('}');
    out
}
