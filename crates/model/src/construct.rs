//! Building entity graphs from nested, untyped documents (e.g. decoded request
//! bodies).
//!
//! Every entity declares a [`Mapper`], which tells apart the keys naming a
//! column from the keys naming a relationship. Relationship values are decoded
//! into a [`Relation`]: a mapping becomes one related entity, a sequence becomes
//! one related entity per mapping element. Elements which are not mappings are
//! kept as they are in [`Related::Other`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// What to do with keys that are neither a column nor a relationship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFields {
    /// Log a warning and skip the key. Values a column can not hold are
    /// skipped the same way.
    #[default]
    Warn,
    /// Fail with [`ConstructionError::UnknownField`], or with
    /// [`ConstructionError::InvalidValue`] for a value the column can not hold.
    Reject,
}

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("expected a mapping to construct {entity}, found {found}")]
    NotAMapping {
        entity: &'static str,
        found: &'static str,
    },
    #[error("invalid value for {entity}.{field}: {source}")]
    InvalidValue {
        entity: &'static str,
        field: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{entity}.{field} holds a single related entity, found a sequence")]
    ExpectedSingle {
        entity: &'static str,
        field: &'static str,
    },
    #[error("unknown field `{field}` for {entity}")]
    UnknownField { entity: &'static str, field: String },
}

pub type Result<T> = core::result::Result<T, ConstructionError>;

/// Static description of how an entity maps onto its table.
#[derive(Debug)]
pub struct Mapper {
    pub entity: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub relationships: &'static [&'static str],
}

impl Mapper {
    pub fn is_column(&self, key: &str) -> bool {
        self.columns.contains(&key)
    }

    pub fn is_relationship(&self, key: &str) -> bool {
        self.relationships.contains(&key)
    }
}

/// One element of a relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum Related<T> {
    Entity(T),
    /// A value that was not a mapping, passed through unchanged.
    Other(Value),
}

impl<T> Related<T> {
    pub fn entity(&self) -> Option<&T> {
        match self {
            Related::Entity(entity) => Some(entity),
            Related::Other(_) => None,
        }
    }
}

/// A decoded relationship value.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation<T> {
    Absent,
    One(Related<T>),
    Many(Vec<Related<T>>),
}

impl<T: Entity> Relation<T> {
    pub fn decode(value: &Value, policy: UnknownFields) -> Result<Self> {
        Ok(match value {
            Value::Null => Relation::Absent,
            Value::Object(document) => {
                Relation::One(Related::Entity(T::from_document(document, policy)?))
            }
            Value::Array(elements) => Relation::Many(
                elements
                    .iter()
                    .map(|element| match element {
                        Value::Object(document) => {
                            T::from_document(document, policy).map(Related::Entity)
                        }
                        other => Ok(Related::Other(other.clone())),
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            other => Relation::One(Related::Other(other.clone())),
        })
    }
}

impl<T> Relation<T> {
    pub fn into_many(self) -> Vec<Related<T>> {
        match self {
            Relation::Absent => Vec::new(),
            Relation::One(related) => vec![related],
            Relation::Many(related) => related,
        }
    }

    /// Narrows the relation to at most one element. `field` names the
    /// relationship for the error message.
    pub fn into_single(
        self,
        entity: &'static str,
        field: &'static str,
    ) -> Result<Option<Box<Related<T>>>> {
        match self {
            Relation::Absent => Ok(None),
            Relation::One(related) => Ok(Some(Box::new(related))),
            Relation::Many(_) => Err(ConstructionError::ExpectedSingle { entity, field }),
        }
    }
}

pub trait Entity: Default + Sized {
    fn mapper() -> &'static Mapper;

    /// Assigns a column value. Only called for keys listed in
    /// [`Mapper::columns`].
    fn set_column(&mut self, key: &str, value: &Value) -> serde_json::Result<()>;

    /// Decodes and assigns a relationship. Only called for keys listed in
    /// [`Mapper::relationships`].
    fn set_relationship(
        &mut self,
        key: &str,
        value: &Value,
        policy: UnknownFields,
    ) -> Result<()>;

    fn from_document(document: &Map<String, Value>, policy: UnknownFields) -> Result<Self> {
        let mapper = Self::mapper();
        let mut entity = Self::default();
        for (key, value) in document {
            if mapper.is_relationship(key) {
                entity.set_relationship(key, value, policy)?;
            } else if mapper.is_column(key) {
                if let Err(source) = entity.set_column(key, value) {
                    match policy {
                        UnknownFields::Warn => log::warn!(
                            "invalid value for {}.{}: {}",
                            mapper.entity,
                            key,
                            source
                        ),
                        UnknownFields::Reject => {
                            return Err(ConstructionError::InvalidValue {
                                entity: mapper.entity,
                                field: key.clone(),
                                source,
                            })
                        }
                    }
                }
            } else {
                match policy {
                    UnknownFields::Warn => {
                        log::warn!(
                            "invalid keyword argument for {}: {}",
                            mapper.entity,
                            key
                        )
                    }
                    UnknownFields::Reject => {
                        return Err(ConstructionError::UnknownField {
                            entity: mapper.entity,
                            field: key.clone(),
                        })
                    }
                }
            }
        }
        Ok(entity)
    }

    fn from_value(value: &Value, policy: UnknownFields) -> Result<Self> {
        match value {
            Value::Object(document) => Self::from_document(document, policy),
            other => Err(ConstructionError::NotAMapping {
                entity: Self::mapper().entity,
                found: kind_of(other),
            }),
        }
    }
}

/// Decodes a nullable column value.
pub(crate) fn column<T: DeserializeOwned>(value: &Value) -> serde_json::Result<Option<T>> {
    Option::<T>::deserialize(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{day::Day, location::Location, task::Task};

    #[test]
    fn nested_sequence_builds_one_entity_per_mapping() {
        let day = Day::from_value(
            &json!({"date": "2024-01-01", "tasks": [{"name": "Inspect"}]}),
            UnknownFields::Warn,
        )
        .unwrap();

        assert_eq!(day.date.unwrap().to_string(), "2024-01-01");
        assert_eq!(day.tasks.len(), 1);
        let task = day.tasks[0].entity().unwrap();
        assert_eq!(task.name.as_deref(), Some("Inspect"));
    }

    #[test]
    fn non_mapping_elements_pass_through() {
        let day = Day::from_value(
            &json!({"tasks": [{"name": "Inspect"}, 7, "loose"]}),
            UnknownFields::Warn,
        )
        .unwrap();

        assert_eq!(day.tasks.len(), 3);
        assert!(day.tasks[0].entity().is_some());
        assert_eq!(day.tasks[1], Related::Other(json!(7)));
        assert_eq!(day.tasks[2], Related::Other(json!("loose")));
    }

    #[test]
    fn single_mapping_builds_one_related_entity() {
        let task = Task::from_value(
            &json!({
                "name": "Deliver",
                "day": {"date": "2024-03-02", "odometer_start": 10, "odometer_end": 30},
                "location": {"street": "Main St", "housenum": "12"}
            }),
            UnknownFields::Warn,
        )
        .unwrap();

        let day = task.day.as_deref().and_then(Related::entity).unwrap();
        assert_eq!(day.mileage(), Some(20));
        let location = task.location.as_deref().and_then(Related::entity).unwrap();
        assert_eq!(location.address(), "Main St, 12");
    }

    #[test]
    fn single_mapping_on_a_collection_becomes_one_element() {
        let day = Day::from_value(
            &json!({"tasks": {"name": "Inspect"}}),
            UnknownFields::Warn,
        )
        .unwrap();
        assert_eq!(day.tasks.len(), 1);
    }

    #[test]
    fn null_relationship_is_cleared() {
        let task =
            Task::from_value(&json!({"day": null}), UnknownFields::Warn).unwrap();
        assert!(task.day.is_none());
    }

    #[test]
    fn sequence_on_a_single_relationship_is_rejected() {
        let result = Task::from_value(&json!({"day": [{}]}), UnknownFields::Warn);
        assert!(matches!(
            result,
            Err(ConstructionError::ExpectedSingle { field: "day", .. })
        ));
    }

    #[test]
    fn unknown_keys_are_skipped_by_default() {
        let day = Day::from_value(&json!({"foo": 1}), UnknownFields::default()).unwrap();
        assert_eq!(day, Day::default());
    }

    #[test]
    fn derived_values_are_not_columns() {
        let day = Day::from_value(
            &json!({"odometer_start": 1, "odometer_end": 3, "mileage": 99}),
            UnknownFields::Warn,
        )
        .unwrap();
        assert_eq!(day.mileage(), Some(2));
    }

    #[test]
    fn unknown_keys_can_be_rejected() {
        let result = Day::from_value(&json!({"foo": 1}), UnknownFields::Reject);
        match result {
            Err(ConstructionError::UnknownField { entity, field }) => {
                assert_eq!(entity, "Day");
                assert_eq!(field, "foo");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_keys_are_rejected_in_nested_documents_too() {
        let result = Location::from_value(
            &json!({"street": "Main St", "tasks": [{"name": "Inspect", "colour": "red"}]}),
            UnknownFields::Reject,
        );
        assert!(matches!(
            result,
            Err(ConstructionError::UnknownField { entity: "Task", .. })
        ));
    }

    #[test]
    fn mistyped_column_values_are_skipped_by_default() {
        let day = Day::from_value(
            &json!({
                "date": "01.01.2024",
                "odometer_start": "1000",
                "odometer_end": 1200,
                "tasks": [{"name": "Inspect", "location": {"wof_country": 1.5, "street": "Main St"}}]
            }),
            UnknownFields::Warn,
        )
        .unwrap();

        assert_eq!(day.date, None);
        assert_eq!(day.odometer_start, None);
        assert_eq!(day.odometer_end, Some(1200));
        let task = day.tasks[0].entity().unwrap();
        assert_eq!(task.name.as_deref(), Some("Inspect"));
        let location = task.location_entity().unwrap();
        assert_eq!(location.wof_country, None);
        assert_eq!(location.street.as_deref(), Some("Main St"));
    }

    #[test]
    fn mistyped_column_values_can_be_rejected() {
        let result = Day::from_value(
            &json!({"date": "2024-01-01", "odometer_start": "1000"}),
            UnknownFields::Reject,
        );
        match result {
            Err(ConstructionError::InvalidValue { entity, field, .. }) => {
                assert_eq!(entity, "Day");
                assert_eq!(field, "odometer_start");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let result = Task::from_value(
            &json!({"location": {"wof_country": 1.5}}),
            UnknownFields::Reject,
        );
        assert!(matches!(
            result,
            Err(ConstructionError::InvalidValue { entity: "Location", .. })
        ));
    }

    #[test]
    fn top_level_must_be_a_mapping() {
        let result = Day::from_value(&json!([1, 2]), UnknownFields::Warn);
        assert!(matches!(
            result,
            Err(ConstructionError::NotAMapping { found: "a sequence", .. })
        ));
    }
}
