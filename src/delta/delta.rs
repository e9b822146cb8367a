//! Partial-update payloads

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::errors::{DeltaError, DeltaResult};
use super::presence::FieldPresenceSet;
use super::schema::{Mergeable, WireSchema};

/// A parsed partial payload and the set of fields it actually supplied.
///
/// The parsed value carries defaults for every omitted field; those defaults
/// are never merged. Only the names in the presence set are copied.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta<T> {
    dto: T,
    presence: FieldPresenceSet,
}

impl<T> Delta<T>
where
    T: WireSchema + DeserializeOwned,
{
    /// Parses a flat JSON object
    pub fn parse(raw: &str) -> DeltaResult<Self> {
        Self::from_value(parse_json(raw)?)
    }

    /// Parses a payload wrapped in its root key, `{"shipment": {...}}`
    pub fn parse_rooted(raw: &str) -> DeltaResult<Self> {
        let value = parse_json(raw)?;
        let Value::Object(mut envelope) = value else {
            return Err(DeltaError::NotAnObject);
        };

        match envelope.remove(T::ROOT_NAME) {
            None => Err(DeltaError::MissingRoot(T::ROOT_NAME)),
            Some(inner @ Value::Object(_)) => Self::from_value(inner),
            Some(_) => Err(DeltaError::RootNotAnObject(T::ROOT_NAME)),
        }
    }

    /// Builds a delta from an already parsed JSON object
    pub fn from_value(value: Value) -> DeltaResult<Self> {
        let Value::Object(object) = value else {
            return Err(DeltaError::NotAnObject);
        };

        // Presence is read from the raw keys before defaults are filled in
        let presence = FieldPresenceSet::from_object(&object, T::FIELD_NAMES);
        let dto = deserialize_object::<T>(object, &presence)?;

        Ok(Self { dto, presence })
    }
}

impl<T> Delta<T> {
    /// The parsed value, with defaults for omitted fields
    pub fn dto(&self) -> &T {
        &self.dto
    }

    pub fn presence(&self) -> &FieldPresenceSet {
        &self.presence
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.presence.contains(name)
    }

    pub fn into_parts(self) -> (T, FieldPresenceSet) {
        (self.dto, self.presence)
    }

    /// Copies every present field onto `target`; absent fields stay as they are.
    ///
    /// Collection fields are replaced as a whole. Merging cannot fail and
    /// merging the same delta twice equals merging it once.
    pub fn merge<Target>(&self, target: &mut Target)
    where
        Target: 'static,
        T: Mergeable<Target>,
    {
        for entry in T::FIELDS {
            if self.presence.contains(entry.name) {
                (entry.copy)(&self.dto, target);
            }
        }
    }

    /// By-value form of [`Delta::merge`]
    pub fn merge_into<Target>(&self, mut target: Target) -> Target
    where
        Target: 'static,
        T: Mergeable<Target>,
    {
        self.merge(&mut target);
        target
    }
}

fn parse_json(raw: &str) -> DeltaResult<Value> {
    serde_json::from_str(raw).map_err(|e| DeltaError::InvalidJson(e.to_string()))
}

fn deserialize_object<T: DeserializeOwned>(
    object: Map<String, Value>,
    presence: &FieldPresenceSet,
) -> DeltaResult<T> {
    match serde_json::from_value::<T>(Value::Object(object.clone())) {
        Ok(dto) => Ok(dto),
        Err(err) => Err(locate_invalid_field::<T>(&object, presence)
            .unwrap_or_else(|| DeltaError::InvalidJson(err.to_string()))),
    }
}

/// Finds the first present field that fails to deserialize on its own.
///
/// Relies on transport types defaulting every field, so a single-key object
/// only fails when that key's value is invalid.
fn locate_invalid_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    presence: &FieldPresenceSet,
) -> Option<DeltaError> {
    presence.iter().find_map(|name| {
        let value = object.get(name)?.clone();
        let mut single = Map::new();
        single.insert(name.to_string(), value);
        serde_json::from_value::<T>(Value::Object(single))
            .err()
            .map(|err| DeltaError::InvalidField {
                field: name.to_string(),
                message: err.to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::FieldCopy;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Parcel {
        label: String,
        weight: f64,
        tags: Vec<String>,
    }

    impl WireSchema for Parcel {
        const ROOT_NAME: &'static str = "parcel";
        const FIELD_NAMES: &'static [&'static str] = &["label", "weight", "tags"];
    }

    impl Mergeable<Parcel> for Parcel {
        const FIELDS: &'static [FieldCopy<Self, Parcel>] = &[
            FieldCopy {
                name: "label",
                copy: |src, dst| dst.label = src.label.clone(),
            },
            FieldCopy {
                name: "weight",
                copy: |src, dst| dst.weight = src.weight,
            },
            FieldCopy {
                name: "tags",
                copy: |src, dst| dst.tags = src.tags.clone(),
            },
        ];
    }

    fn existing() -> Parcel {
        Parcel {
            label: "old".to_string(),
            weight: 2.5,
            tags: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_only_present_fields_merge() {
        let delta = Delta::<Parcel>::parse(r#"{"label": "new"}"#).unwrap();
        let merged = delta.merge_into(existing());

        assert_eq!(merged.label, "new");
        assert_eq!(merged.weight, 2.5);
        assert_eq!(merged.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_zero_and_empty_values_still_merge() {
        let delta = Delta::<Parcel>::parse(r#"{"weight": 0, "label": ""}"#).unwrap();
        let merged = delta.merge_into(existing());

        assert_eq!(merged.weight, 0.0);
        assert_eq!(merged.label, "");
    }

    #[test]
    fn test_collection_is_replaced_whole() {
        let delta = Delta::<Parcel>::parse(r#"{"tags": ["c"]}"#).unwrap();
        assert_eq!(delta.merge_into(existing()).tags, vec!["c"]);

        let delta = Delta::<Parcel>::parse(r#"{"tags": []}"#).unwrap();
        assert!(delta.merge_into(existing()).tags.is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let delta = Delta::<Parcel>::parse(r#"{"label": "x", "tags": ["z"]}"#).unwrap();
        let once = delta.merge_into(existing());
        let twice = delta.merge_into(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_undeclared_keys_are_ignored() {
        let delta = Delta::<Parcel>::parse(r#"{"colour": "red"}"#).unwrap();
        assert!(delta.presence().is_empty());
        assert_eq!(delta.merge_into(existing()), existing());
    }

    #[test]
    fn test_rooted_payload() {
        let delta = Delta::<Parcel>::parse_rooted(r#"{"parcel": {"weight": 9}}"#).unwrap();
        assert!(delta.is_present("weight"));
        assert_eq!(delta.dto().weight, 9.0);

        assert_eq!(
            Delta::<Parcel>::parse_rooted(r#"{"weight": 9}"#),
            Err(DeltaError::MissingRoot("parcel"))
        );
        assert_eq!(
            Delta::<Parcel>::parse_rooted(r#"{"parcel": [1]}"#),
            Err(DeltaError::RootNotAnObject("parcel"))
        );
    }

    #[test]
    fn test_malformed_payloads_are_rejected() {
        assert!(matches!(
            Delta::<Parcel>::parse("{not json"),
            Err(DeltaError::InvalidJson(_))
        ));
        assert_eq!(Delta::<Parcel>::parse("[1, 2]"), Err(DeltaError::NotAnObject));
    }

    #[test]
    fn test_type_error_names_the_field() {
        let err = Delta::<Parcel>::parse(r#"{"label": "ok", "weight": "heavy"}"#).unwrap_err();
        match err {
            DeltaError::InvalidField { field, .. } => assert_eq!(field, "weight"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
