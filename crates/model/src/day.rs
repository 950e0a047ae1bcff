use chrono::NaiveDate;
use serde_json::Value;
use utility::id::{HasId, Id};

use crate::{
    construct::{column, Entity, Mapper, Related, Relation, Result, UnknownFields},
    task::Task,
};

/// Fuel consumption of the vehicle in litres per 100 km.
pub const CONSUMPTION_PER_100_KM: f64 = 19.35;

/// One calendar day of vehicle use.
/// Table: `days`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Day {
    pub id: Option<Id<Day>>,
    pub date: Option<NaiveDate>,
    pub refill: Option<f64>,
    pub fuel_start: Option<f64>,
    pub fuel_end: Option<f64>,
    pub odometer_start: Option<i32>,
    pub odometer_end: Option<i32>,
    pub tasks: Vec<Related<Task>>,
}

impl Day {
    /// Distance driven on this day, if both odometer readings are known.
    pub fn mileage(&self) -> Option<i64> {
        match (self.odometer_start, self.odometer_end) {
            (Some(start), Some(end)) => Some(i64::from(end) - i64::from(start)),
            _ => None,
        }
    }

    /// Estimated fuel used on this day. `None` when nothing was driven.
    pub fn consumption(&self) -> Option<f64> {
        self.mileage()
            .filter(|mileage| *mileage != 0)
            .map(|mileage| mileage as f64 * CONSUMPTION_PER_100_KM / 100.0)
    }

    pub fn task_entities(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter_map(Related::entity)
    }
}

impl HasId for Day {
    type IdType = i32;
}

static MAPPER: Mapper = Mapper {
    entity: "Day",
    table: "days",
    columns: &[
        "id",
        "date",
        "refill",
        "fuel_start",
        "fuel_end",
        "odometer_start",
        "odometer_end",
    ],
    relationships: &["tasks"],
};

impl Entity for Day {
    fn mapper() -> &'static Mapper {
        &MAPPER
    }

    fn set_column(&mut self, key: &str, value: &Value) -> serde_json::Result<()> {
        match key {
            "id" => self.id = column(value)?,
            "date" => self.date = utility::serde::date::deserialize_option(value)?,
            "refill" => self.refill = column(value)?,
            "fuel_start" => self.fuel_start = column(value)?,
            "fuel_end" => self.fuel_end = column(value)?,
            "odometer_start" => self.odometer_start = column(value)?,
            "odometer_end" => self.odometer_end = column(value)?,
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
        if key == "tasks" {
            self.tasks = Relation::<Task>::decode(value, policy)?.into_many();
        }
        Ok(())
    }
}
