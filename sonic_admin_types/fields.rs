use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SchemaError;

pub const DEFAULT_TEXTAREA_ROWS: u32 = 4;
pub const DEFAULT_RICH_TEXT_ROWS: u32 = 8;
/// Position assigned to schema fields without an explicit UI position.
pub const DEFAULT_FIELD_POSITION: u32 = 999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Input control a field renders as. Each variant carries only the attributes its control needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default)]
        step: Option<f64>,
    },
    Date,
    Textarea { rows: u32 },
    RichText { rows: u32 },
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Checkbox,
    File,
}

impl FieldKind {
    pub fn textarea() -> Self {
        Self::Textarea {
            rows: DEFAULT_TEXTAREA_ROWS,
        }
    }

    pub fn rich_text() -> Self {
        Self::RichText {
            rows: DEFAULT_RICH_TEXT_ROWS,
        }
    }

    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        Self::Number {
            min,
            max,
            step: None,
        }
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        Self::Select { options }
    }

    /// Maps a schema type name to a control. Unknown names fall back to a plain text input.
    fn from_schema_type(type_name: &str, validation: RawValidation) -> Self {
        let options = || {
            validation
                .options
                .iter()
                .cloned()
                .map(SelectOption::plain)
                .collect::<Vec<_>>()
        };

        match type_name {
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::number(validation.min, validation.max),
            "date" | "datetime" => Self::Date,
            "textarea" => Self::textarea(),
            "rich_text" => Self::rich_text(),
            "select" => Self::select(options()),
            "multi_select" => Self::MultiSelect { options: options() },
            "checkbox" | "boolean" => Self::Checkbox,
            "file" => Self::File,
            "text" | "string" | "slug" | "url" => Self::Text,
            other => {
                tracing::warn!(field_type = other, "Unknown field type, rendering a text input");
                Self::Text
            }
        }
    }
}

/// A single field of a content model, as consumed by form generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default = "default_position")]
    pub position: u32,
}

fn default_position() -> u32 {
    DEFAULT_FIELD_POSITION
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            required: false,
            placeholder: None,
            help_text: None,
            position: DEFAULT_FIELD_POSITION,
        }
    }

    /// Reads one entry of a content-model schema (`{"type": ..., "ui": {...}, "validation": {...}}`).
    pub fn from_schema(name: &str, schema: Value) -> Result<Self, serde_json::Error> {
        let raw: RawField = serde_json::from_value(schema)?;
        let type_name = raw.field_type.unwrap_or_else(|| "text".to_string());

        Ok(Self {
            name: name.to_string(),
            label: raw.label.filter(|l| !l.is_empty()),
            kind: FieldKind::from_schema_type(&type_name, raw.validation),
            required: raw.required.unwrap_or(false),
            placeholder: raw.ui.placeholder.or(raw.placeholder).filter(|p| !p.is_empty()),
            help_text: raw.ui.help_text.or(raw.description).filter(|h| !h.is_empty()),
            position: raw.ui.position.unwrap_or(DEFAULT_FIELD_POSITION),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    #[serde(rename = "type", default)]
    field_type: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    required: Option<bool>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    ui: RawUi,
    #[serde(default)]
    validation: RawValidation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUi {
    #[serde(default)]
    position: Option<u32>,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    help_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawValidation {
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
}

/// Content model (collection schema) driving dynamic content forms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawContentModel")]
pub struct ContentModel {
    pub name: String,
    pub display_name: String,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContentModel {
    name: String,
    #[serde(default, alias = "display_name")]
    display_name: Option<String>,
    #[serde(default)]
    fields: Value,
}

impl TryFrom<RawContentModel> for ContentModel {
    type Error = SchemaError;

    fn try_from(raw: RawContentModel) -> Result<Self, Self::Error> {
        let display_name = raw.display_name.unwrap_or_else(|| raw.name.clone());
        ContentModel::from_schema(raw.name, display_name, raw.fields)
    }
}

impl ContentModel {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            fields,
        }
    }

    /// Builds a model from the schema engine's field map. A null schema yields a model without fields.
    pub fn from_schema(
        name: impl Into<String>,
        display_name: impl Into<String>,
        schema: Value,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let entries = match schema {
            Value::Null => Default::default(),
            Value::Object(map) => map,
            _ => return Err(SchemaError::FieldsNotAnObject { model: name }),
        };

        let fields = entries
            .into_iter()
            .map(|(field, value)| {
                FieldDefinition::from_schema(&field, value).map_err(|source| {
                    SchemaError::InvalidField {
                        model: name.clone(),
                        field: field.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            display_name: display_name.into(),
            name,
            fields,
        })
    }

    /// Parses a whole model object, e.g. a row coming from the collections table.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fields in UI order. Fields sharing a position keep their schema order.
    pub fn ordered_fields(&self) -> Vec<&FieldDefinition> {
        let mut fields: Vec<&FieldDefinition> = self.fields.iter().collect();
        fields.sort_by_key(|f| f.position);
        fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blog_schema() -> Value {
        json!({
            "body": { "type": "rich_text", "label": "Body", "ui": { "position": 3 } },
            "title": {
                "type": "text",
                "required": true,
                "ui": { "position": 1, "placeholder": "Post title", "helpText": "Shown in listings" }
            },
            "category": {
                "type": "select",
                "validation": { "options": ["news", "guides"] },
                "ui": { "position": 2 }
            },
            "rating": { "type": "number", "validation": { "min": 1, "max": 5 } },
            "summary": { "type": "textarea", "description": "Short teaser" },
            "mystery": { "type": "hologram" }
        })
    }

    #[test]
    fn test_from_schema_maps_kinds() {
        let model = ContentModel::from_schema("blog_posts", "Blog Posts", blog_schema()).unwrap();

        assert_eq!(model.fields.len(), 6);
        assert_eq!(model.field("body").unwrap().kind, FieldKind::RichText { rows: 8 });
        assert_eq!(model.field("summary").unwrap().kind, FieldKind::Textarea { rows: 4 });
        assert_eq!(
            model.field("category").unwrap().kind,
            FieldKind::Select {
                options: vec![SelectOption::plain("news"), SelectOption::plain("guides")]
            }
        );
        assert_eq!(
            model.field("rating").unwrap().kind,
            FieldKind::Number {
                min: Some(1.0),
                max: Some(5.0),
                step: None
            }
        );
        assert_eq!(model.field("mystery").unwrap().kind, FieldKind::Text);
    }

    #[test]
    fn test_from_schema_reads_ui_hints() {
        let model = ContentModel::from_schema("blog_posts", "Blog Posts", blog_schema()).unwrap();
        let title = model.field("title").unwrap();

        assert!(title.required);
        assert_eq!(title.placeholder.as_deref(), Some("Post title"));
        assert_eq!(title.help_text.as_deref(), Some("Shown in listings"));
        assert_eq!(title.label, None);

        let summary = model.field("summary").unwrap();
        assert_eq!(summary.help_text.as_deref(), Some("Short teaser"));
        assert_eq!(summary.position, DEFAULT_FIELD_POSITION);
    }

    #[test]
    fn test_ordered_fields_is_stable() {
        let model = ContentModel::from_schema("blog_posts", "Blog Posts", blog_schema()).unwrap();
        let names: Vec<&str> = model.ordered_fields().iter().map(|f| f.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["title", "category", "body", "rating", "summary", "mystery"]
        );
    }

    #[test]
    fn test_null_schema_has_no_fields() {
        let model = ContentModel::from_schema("pages", "Pages", Value::Null).unwrap();
        assert!(model.fields.is_empty());
    }

    #[test]
    fn test_non_object_schema_is_rejected() {
        let err = ContentModel::from_schema("pages", "Pages", json!(["title"])).unwrap_err();
        assert!(matches!(err, SchemaError::FieldsNotAnObject { .. }));
    }

    #[test]
    fn test_invalid_field_reports_name() {
        let err =
            ContentModel::from_schema("pages", "Pages", json!({ "title": { "required": "yes" } }))
                .unwrap_err();
        match err {
            SchemaError::InvalidField { field, model, .. } => {
                assert_eq!(field, "title");
                assert_eq!(model, "pages");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deserialize_model_json() {
        let model = ContentModel::from_json(
            r#"{"name": "faqs", "displayName": "FAQs", "fields": {"question": {"type": "textarea"}}}"#,
        )
        .unwrap();
        assert_eq!(model.display_name, "FAQs");
        assert_eq!(model.fields[0].kind, FieldKind::textarea());

        let unnamed = ContentModel::from_json(r#"{"name": "pages"}"#).unwrap();
        assert_eq!(unnamed.display_name, "pages");
    }
}
