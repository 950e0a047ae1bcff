//! Transfer shapes. Every field is optional, so a shape may be built from any
//! subset of the data. `From<&Entity>` projects an entity field by field,
//! including its derived values and any nested entities it holds.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate,
    day::Day,
    distance::Distance,
    location::{HouseNumber, Location},
    task::Task,
};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayDto {
    #[serde(
        default,
        serialize_with = "utility::serde::date::serialize_option",
        deserialize_with = "utility::serde::date::deserialize_option"
    )]
    #[schemars(schema_with = "utility::serde::date::schema_option")]
    pub date: Option<NaiveDate>,
    pub refill: Option<f64>,
    pub fuel_start: Option<f64>,
    pub fuel_end: Option<f64>,
    pub odometer_start: Option<i32>,
    pub odometer_end: Option<i32>,
    pub mileage: Option<i64>,
    pub consumption: Option<f64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoordinatesDto {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocationDto {
    pub name: Option<String>,
    pub coords: Option<CoordinatesDto>,
    pub additional_name: Option<String>,
    pub comment_name: Option<String>,
    pub street: Option<String>,
    pub housenum: Option<HouseNumber>,
    pub address: Option<String>,
    pub additional_address: Option<String>,
    pub comment_address: Option<String>,
    pub country: Option<String>,
    pub country_a: Option<String>,
    pub region: Option<String>,
    pub region_a: Option<String>,
    pub county: Option<String>,
    pub locality: Option<String>,
    pub wof_country: Option<i32>,
    pub wof_region: Option<i32>,
    pub wof_county: Option<i32>,
    pub wof_locality: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskDto {
    pub day: Option<DayDto>,
    pub task_name: Option<String>,
    pub location: Option<LocationDto>,
    pub department: Option<String>,
    pub responsible: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DistanceDto {
    pub day: Option<DayDto>,
    pub location_from: Option<LocationDto>,
    pub location_to: Option<LocationDto>,
    pub distance: Option<i32>,
}

impl From<&Day> for DayDto {
    fn from(day: &Day) -> Self {
        Self {
            date: day.date,
            refill: day.refill,
            fuel_start: day.fuel_start,
            fuel_end: day.fuel_end,
            odometer_start: day.odometer_start,
            odometer_end: day.odometer_end,
            mileage: day.mileage(),
            consumption: day.consumption(),
        }
    }
}

impl From<&Coordinate> for CoordinatesDto {
    fn from(coordinate: &Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lon: coordinate.lon,
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            coords: location.coordinate().map(CoordinatesDto::from),
            additional_name: location.additional_name.clone(),
            comment_name: location.comment_name.clone(),
            street: location.street.clone(),
            housenum: location.housenum.clone().map(HouseNumber::Text),
            address: Some(location.address()),
            additional_address: location.additional_address.clone(),
            comment_address: location.comment_address.clone(),
            country: location.country.clone(),
            country_a: location.country_a.clone(),
            region: location.region.clone(),
            region_a: location.region_a.clone(),
            county: location.county.clone(),
            locality: location.locality.clone(),
            wof_country: location.wof_country,
            wof_region: location.wof_region,
            wof_county: location.wof_county,
            wof_locality: location.wof_locality,
        }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            day: task.day_entity().map(DayDto::from),
            task_name: task.name.clone(),
            location: task.location_entity().map(LocationDto::from),
            department: task.department.clone(),
            responsible: task.responsible.clone(),
        }
    }
}

impl From<&Distance> for DistanceDto {
    /// Distances are not tied to a day, so `day` stays empty.
    fn from(distance: &Distance) -> Self {
        Self {
            day: None,
            location_from: distance.from_location().map(LocationDto::from),
            location_to: distance.to_location().map(LocationDto::from),
            distance: distance.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::construct::{Entity, UnknownFields};

    #[test]
    fn day_projection_carries_derived_values() {
        let day = Day::from_value(
            &json!({
                "date": "2024-05-01",
                "fuel_start": 40.0,
                "fuel_end": 22.5,
                "odometer_start": 1000,
                "odometer_end": 1100
            }),
            UnknownFields::Warn,
        )
        .unwrap();

        let dto = DayDto::from(&day);
        assert_eq!(dto.mileage, Some(100));
        assert_eq!(dto.consumption, Some(100.0 * 19.35 / 100.0));
        assert_eq!(dto.refill, None);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "date": "2024-05-01",
                "fuel_start": 40.0,
                "fuel_end": 22.5,
                "odometer_start": 1000,
                "odometer_end": 1100,
                "mileage": 100,
                "consumption": 100.0 * 19.35 / 100.0
            })
        );
    }

    #[test]
    fn task_projection_follows_nested_entities() {
        let task = Task::from_value(
            &json!({
                "name": "Inspect",
                "department": "Fleet",
                "day": {"date": "2024-05-01"},
                "location": {
                    "name": "Depot",
                    "street": "Main St",
                    "housenum": 12,
                    "coords": {"lat": 54.3, "lon": 10.1}
                }
            }),
            UnknownFields::Warn,
        )
        .unwrap();

        let dto = TaskDto::from(&task);
        assert_eq!(dto.task_name.as_deref(), Some("Inspect"));
        assert_eq!(dto.responsible, None);
        assert_eq!(
            dto.day.and_then(|day| day.date).map(|date| date.to_string()),
            Some("2024-05-01".to_owned())
        );
        let location = dto.location.unwrap();
        assert_eq!(location.address.as_deref(), Some("Depot, Main St, 12"));
        assert_eq!(
            location.coords,
            Some(CoordinatesDto {
                lat: Some(54.3),
                lon: Some(10.1)
            })
        );
    }

    #[test]
    fn distance_projection_has_no_day() {
        let distance = Distance::from_value(
            &json!({"distance": 7, "loc_to_obj": {"street": "Main St", "housenum": "1"}}),
            UnknownFields::Warn,
        )
        .unwrap();
        let dto = DistanceDto::from(&distance);
        assert_eq!(dto.day, None);
        assert_eq!(dto.location_from, None);
        assert_eq!(
            dto.location_to.and_then(|location| location.address),
            Some("Main St, 1".to_owned())
        );
        assert_eq!(dto.distance, Some(7));
    }

    #[test]
    fn shapes_tolerate_any_subset_of_fields() {
        let dto: TaskDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto, TaskDto::default());

        let dto: LocationDto =
            serde_json::from_value(json!({"housenum": 12, "coords": {"lat": 1.0}}))
                .unwrap();
        assert_eq!(dto.housenum, Some(HouseNumber::Number(12)));
        assert_eq!(dto.coords.and_then(|coords| coords.lon), None);

        let dto: DistanceDto = serde_json::from_value(json!({
            "day": {"date": "2024-01-01T07:00:00"},
            "distance": 3
        }))
        .unwrap();
        assert_eq!(
            dto.day.and_then(|day| day.date),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn empty_shapes_serialize_to_empty_objects() {
        assert_eq!(
            serde_json::to_value(LocationDto::default()).unwrap(),
            json!({})
        );
    }
}
