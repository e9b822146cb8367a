//! Field-selective JSON rendering

use serde_json::{Map, Value};
use thiserror::Error;

use super::root::RootObject;
use super::selection::FieldSelection;

/// Result type for serialization
pub type SerializerResult<T> = Result<T, SerializerError>;

/// Serialization failures
#[derive(Debug, Error)]
pub enum SerializerError {
    /// The envelope could not be converted to JSON
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders root objects down to a requested subset of fields
pub struct JsonFieldsSerializer;

impl JsonFieldsSerializer {
    /// Renders `root` as JSON text.
    ///
    /// With an empty selection the whole envelope is rendered. Otherwise the
    /// envelope key is kept and every object under it is pruned to the
    /// selected names it declares; unknown names are ignored.
    pub fn serialize<R: RootObject>(root: &R, selection: &FieldSelection) -> SerializerResult<String> {
        let mut document = serde_json::to_value(root)?;

        if !selection.is_empty() {
            let declared = root.primary_field_names();
            if let Some(primary) = document.get_mut(root.primary_property_name()) {
                prune(primary, declared, selection);
            }
        }

        Ok(serde_json::to_string(&document)?)
    }
}

fn prune(value: &mut Value, declared: &[&str], selection: &FieldSelection) {
    match value {
        Value::Array(items) => {
            for item in items {
                prune(item, declared, selection);
            }
        }
        Value::Object(object) => retain_selected(object, declared, selection),
        _ => {}
    }
}

fn retain_selected(object: &mut Map<String, Value>, declared: &[&str], selection: &FieldSelection) {
    object.retain(|key, _| declared.contains(&key.as_str()) && selection.contains(key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Widget {
        id: u32,
        name: String,
        tags: Vec<String>,
    }

    #[derive(Serialize)]
    struct WidgetsRoot {
        widgets: Vec<Widget>,
    }

    impl RootObject for WidgetsRoot {
        fn primary_property_name(&self) -> &'static str {
            "widgets"
        }

        fn primary_field_names(&self) -> &'static [&'static str] {
            &["id", "name", "tags"]
        }
    }

    fn root() -> WidgetsRoot {
        WidgetsRoot {
            widgets: vec![
                Widget {
                    id: 1,
                    name: "a".to_string(),
                    tags: vec!["x".to_string()],
                },
                Widget {
                    id: 2,
                    name: "b".to_string(),
                    tags: vec![],
                },
            ],
        }
    }

    fn render(selection: &str) -> Value {
        let text = JsonFieldsSerializer::serialize(&root(), &FieldSelection::parse(selection)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_empty_selection_renders_everything() {
        assert_eq!(render(""), serde_json::to_value(root()).unwrap());
    }

    #[test]
    fn test_selection_prunes_each_element() {
        let doc = render("name");
        assert_eq!(doc, json!({"widgets": [{"name": "a"}, {"name": "b"}]}));
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let doc = render("id,colour");
        assert_eq!(doc, json!({"widgets": [{"id": 1}, {"id": 2}]}));

        let doc = render("colour");
        assert_eq!(doc, json!({"widgets": [{}, {}]}));
    }

    #[test]
    fn test_selection_is_case_sensitive() {
        let doc = render("Name");
        assert_eq!(doc, json!({"widgets": [{}, {}]}));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = JsonFieldsSerializer::serialize(&root(), &FieldSelection::parse("tags,id")).unwrap();
        let second = JsonFieldsSerializer::serialize(&root(), &FieldSelection::parse("id,tags")).unwrap();
        assert_eq!(first, second);
    }
}
