use std::fmt;

use serde_json::Value;
use utility::id::{HasId, Id};

use crate::{
    construct::{column, Entity, Mapper, Related, Relation, Result, UnknownFields},
    day::Day,
    display_option,
    location::Location,
};

/// Work performed on a given day at a given location.
/// Table: `tasks`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    pub id: Option<Id<Task>>,
    pub day_id: Option<Id<Day>>,
    pub count: Option<i32>,
    pub name: Option<String>,
    pub loc_id: Option<Id<Location>>,
    pub department: Option<String>,
    pub responsible: Option<String>,
    pub note: Option<String>,
    pub day: Option<Box<Related<Day>>>,
    pub location: Option<Box<Related<Location>>>,
}

impl Task {
    pub fn day_entity(&self) -> Option<&Day> {
        self.day.as_deref().and_then(Related::entity)
    }

    pub fn location_entity(&self) -> Option<&Location> {
        self.location.as_deref().and_then(Related::entity)
    }

    /// The location this task refers to, either by its foreign key or through
    /// an already stored related location.
    pub fn location_id(&self) -> Option<Id<Location>> {
        self.loc_id
            .or_else(|| self.location_entity().and_then(|location| location.id))
    }
}

impl HasId for Task {
    type IdType = i32;
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Task(id={}, day_id={}, name={}, department={}, responsible={})>",
            display_option(&self.id),
            display_option(&self.day_id),
            display_option(&self.name),
            display_option(&self.department),
            display_option(&self.responsible)
        )
    }
}

static MAPPER: Mapper = Mapper {
    entity: "Task",
    table: "tasks",
    columns: &[
        "id",
        "day_id",
        "count",
        "name",
        "loc_id",
        "department",
        "responsible",
        "note",
    ],
    relationships: &["day", "location"],
};

impl Entity for Task {
    fn mapper() -> &'static Mapper {
        &MAPPER
    }

    fn set_column(&mut self, key: &str, value: &Value) -> serde_json::Result<()> {
        match key {
            "id" => self.id = column(value)?,
            "day_id" => self.day_id = column(value)?,
            "count" => self.count = column(value)?,
            "name" => self.name = column(value)?,
            "loc_id" => self.loc_id = column(value)?,
            "department" => self.department = column(value)?,
            "responsible" => self.responsible = column(value)?,
            "note" => self.note = column(value)?,
            _ => {}
        }
        Ok(())
    }

    fn set_relationship(
        &mut self,
        key: &str,
        value: &Value,
        policy: UnknownFields,
    ) -> Result<()> {
        match key {
            "day" => {
                self.day = Relation::<Day>::decode(value, policy)?
                    .into_single(MAPPER.entity, "day")?
            }
            "location" => {
                self.location = Relation::<Location>::decode(value, policy)?
                    .into_single(MAPPER.entity, "location")?
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_like_a_record() {
        let task = Task {
            id: Some(Id::new(1)),
            day_id: Some(Id::new(3)),
            name: Some("Inspect".to_owned()),
            department: Some("Fleet".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            task.to_string(),
            "<Task(id=1, day_id=3, name=Inspect, department=Fleet, responsible=None)>"
        );
    }

    #[test]
    fn location_id_falls_back_to_the_related_location() {
        let task = Task::from_value(
            &json!({"name": "Inspect", "location": {"id": 9}}),
            UnknownFields::Warn,
        )
        .unwrap();
        assert_eq!(task.location_id(), Some(Id::new(9)));

        let task = Task {
            loc_id: Some(Id::new(2)),
            ..task
        };
        assert_eq!(task.location_id(), Some(Id::new(2)));
    }

    #[test]
    fn foreign_keys_are_plain_columns() {
        let task = Task::from_value(
            &json!({"day_id": 4, "loc_id": 5, "count": 2, "note": null}),
            UnknownFields::Reject,
        )
        .unwrap();
        assert_eq!(task.day_id, Some(Id::new(4)));
        assert_eq!(task.loc_id, Some(Id::new(5)));
        assert_eq!(task.count, Some(2));
        assert_eq!(task.note, None);
    }
}
