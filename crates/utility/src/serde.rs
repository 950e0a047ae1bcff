pub mod date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use schemars::gen::SchemaGenerator;
    use schemars::schema::{InstanceType, Schema, SchemaObject};
    use serde::{
        de::{self, Unexpected},
        Deserialize as _, Deserializer, Serializer,
    };

    /// Parses a calendar date from either a plain date (`2024-01-01`), a
    /// naive date time (`2024-01-01T08:30:00`) or an RFC 3339 timestamp. The
    /// time of day is dropped.
    pub fn parse_lenient(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|date_time| date_time.date())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
                    .ok()
                    .map(|date_time| date_time.date())
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|date_time| date_time.date_naive())
            })
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn serialize_option<S>(
        option_date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match option_date {
            Some(date) => serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize_option<'de, D>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse_lenient(&s).map(Some).ok_or_else(|| {
                <D::Error as de::Error>::invalid_value(
                    Unexpected::Str(&s),
                    &"a date (YYYY-MM-DD) or a date time",
                )
            }),
            None => Ok(None),
        }
    }

    pub fn schema_option(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            format: Some("date".to_owned()),
            ..Default::default()
        }
        .into()
    }

    #[cfg(test)]
    mod tests {
        use chrono::NaiveDate;
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(
                default,
                serialize_with = "super::serialize_option",
                deserialize_with = "super::deserialize_option"
            )]
            date: Option<NaiveDate>,
        }

        fn new_year() -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        }

        #[test]
        fn accepts_dates_and_date_times() {
            assert_eq!(super::parse_lenient("2024-01-01"), Some(new_year()));
            assert_eq!(
                super::parse_lenient("2024-01-01T08:15:00"),
                Some(new_year())
            );
            assert_eq!(
                super::parse_lenient("2024-01-01 08:15:00.250"),
                Some(new_year())
            );
            assert_eq!(
                super::parse_lenient("2024-01-01T23:00:00+02:00"),
                Some(new_year())
            );
            assert_eq!(super::parse_lenient("01.01.2024"), None);
        }

        #[test]
        fn optional_field_round_trips_as_plain_date() {
            let parsed: Wrapper =
                serde_json::from_str(r#"{"date": "2024-01-01T10:00:00"}"#).unwrap();
            assert_eq!(parsed.date, Some(new_year()));
            assert_eq!(
                serde_json::to_string(&parsed).unwrap(),
                r#"{"date":"2024-01-01"}"#
            );

            let empty: Wrapper = serde_json::from_str("{}").unwrap();
            assert_eq!(empty.date, None);
        }

        #[test]
        fn rejects_garbage() {
            assert!(serde_json::from_str::<Wrapper>(r#"{"date": "soon"}"#).is_err());
        }
    }
}
