use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{FoomaxError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    StringArray,
    Number,
    Boolean,
}

impl FieldType {
    fn to_schema(self) -> Value {
        match self {
            FieldType::String => json!({ "type": "STRING" }),
            FieldType::StringArray => json!({ "type": "ARRAY", "items": { "type": "STRING" } }),
            FieldType::Number => json!({ "type": "NUMBER" }),
            FieldType::Boolean => json!({ "type": "BOOLEAN" }),
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::StringArray => value
                .as_array()
                .map_or(false, |items| items.iter().all(Value::is_string)),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldType,
    pub description: String,
}

/// Shape a schema-mode response has to satisfy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputSchema {
    pub fields: Vec<SchemaField>,
    pub required: Vec<String>,
}

impl OutputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, kind: FieldType, description: &str) -> Self {
        self.fields.push(SchemaField {
            name: name.to_string(),
            kind,
            description: description.to_string(),
        });
        self
    }

    pub fn required_field(self, name: &str, kind: FieldType, description: &str) -> Self {
        let mut schema = self.field(name, kind, description);
        schema.required.push(name.to_string());
        schema
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.kind)
    }

    /// Gemini `responseSchema` representation.
    pub fn to_response_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| {
                let mut spec = field.kind.to_schema();
                if let Some(obj) = spec.as_object_mut() {
                    obj.insert("description".to_string(), json!(field.description));
                }
                (field.name.clone(), spec)
            })
            .collect();

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": self.required,
        })
    }

    /// Checks required presence and declared types. Unknown extra keys are allowed.
    pub fn validate(&self, value: &Value) -> Result<()> {
        let object = value
            .as_object()
            .ok_or_else(|| FoomaxError::ParseError("expected a JSON object".into()))?;

        for name in &self.required {
            if object.get(name).map_or(true, Value::is_null) {
                return Err(FoomaxError::ParseError(format!(
                    "missing required field `{}`",
                    name
                )));
            }
        }

        for field in &self.fields {
            match object.get(&field.name) {
                Some(Value::Null) | None => {}
                Some(v) if field.kind.accepts(v) => {}
                Some(_) => {
                    return Err(FoomaxError::ParseError(format!(
                        "field `{}` is not of type {:?}",
                        field.name, field.kind
                    )))
                }
            }
        }

        Ok(())
    }
}
