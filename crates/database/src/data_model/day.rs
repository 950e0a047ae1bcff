use chrono::NaiveDate;
use model::day::Day;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct DayRow {
    pub id: i32,
    pub date: NaiveDate,
    pub refill: Option<f64>,
    pub fuel_start: f64,
    pub fuel_end: f64,
    pub odometer_start: i32,
    pub odometer_end: i32,
}

impl DatabaseRow for DayRow {
    type Model = Day;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Day {
            id: Some(self.get_id()),
            date: Some(self.date),
            refill: self.refill,
            fuel_start: Some(self.fuel_start),
            fuel_end: Some(self.fuel_end),
            odometer_start: Some(self.odometer_start),
            odometer_end: Some(self.odometer_end),
            tasks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_a_day_with_derived_values() {
        let row = DayRow {
            id: 5,
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            refill: None,
            fuel_start: 30.0,
            fuel_end: 12.0,
            odometer_start: 48_000,
            odometer_end: 48_210,
        };
        let day = row.to_model();
        assert_eq!(day.id, Some(Id::new(5)));
        assert_eq!(day.mileage(), Some(210));
        assert!(day.tasks.is_empty());
    }
}
