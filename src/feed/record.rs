//! Mapping tokenized lines onto named-field records.

use aurorawatch_types::Reading;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::extract::{extract_lines, RawLine};
use super::schema::FeedSchema;

/// One sample from one feed.
///
/// Holds a reading for every field its schema declares, in schema order.
/// Fields that were absent or unparsable are `Reading::Missing`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    schema: &'static FeedSchema,
    values: Vec<Reading>,
}

impl DataRecord {
    /// Map a tokenized line through a feed schema. Never fails.
    pub fn map(line: &RawLine, schema: &'static FeedSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|(index, _)| line.get(*index).map_or(Reading::Missing, Reading::parse))
            .collect();
        Self { schema, values }
    }

    /// A record with every field missing.
    pub fn missing(schema: &'static FeedSchema) -> Self {
        Self {
            schema,
            values: vec![Reading::Missing; schema.fields.len()],
        }
    }

    pub fn schema(&self) -> &'static FeedSchema {
        self.schema
    }

    /// Reading for a named field, or `None` if this feed does not declare it.
    pub fn get(&self, name: &str) -> Option<Reading> {
        self.schema.position(name).map(|i| self.values[i])
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Reading)> + '_ {
        self.schema.field_names().zip(self.values.iter().copied())
    }

    /// True if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Reading::is_missing)
    }
}

impl Serialize for DataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, reading) in self.fields() {
            map.serialize_entry(name, &reading.raw())?;
        }
        map.end()
    }
}

/// Parse a whole feed into records, most recent first.
pub fn parse_feed(text: &str, schema: &'static FeedSchema) -> Vec<DataRecord> {
    extract_lines(text)
        .iter()
        .map(|line| DataRecord::map(line, schema))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::schema::{KINDEX, MAGNETOMETER, PLASMA};

    #[test]
    fn test_map_magnetometer_line() {
        let line = RawLine::tokenize(
            "2021 01 01  0002   59215    120    0    -2.3     1.1    -4.4     5.1   -59.8   154.4",
        );
        let record = DataRecord::map(&line, &MAGNETOMETER);
        assert_eq!(record.get("YR"), Some(Reading::Present(2021.0)));
        assert_eq!(record.get("Time"), Some(Reading::Present(2.0)));
        assert_eq!(record.get("Bz"), Some(Reading::Present(-4.4)));
        assert_eq!(record.get("Long"), Some(Reading::Present(154.4)));
        assert_eq!(record.fields().count(), 13);
    }

    #[test]
    fn test_map_plasma_line() {
        let line = RawLine::tokenize(
            "2021 01 01  0002   59215    120    0      5.3      421.7    1.09e+05",
        );
        let record = DataRecord::map(&line, &PLASMA);
        assert_eq!(record.get("Density"), Some(Reading::Present(5.3)));
        assert_eq!(record.get("Speed"), Some(Reading::Present(421.7)));
        assert_eq!(record.get("IonTemperature"), Some(Reading::Present(109000.0)));
    }

    #[test]
    fn test_map_kindex_line() {
        let line = RawLine::tokenize(
            "2021 01 01 0000 2021 01 01 0100 0 2.33 2021 01 01 0400 0 2.67 1 3.00",
        );
        let record = DataRecord::map(&line, &KINDEX);
        assert_eq!(record.get("Kp1Hour"), Some(Reading::Present(2.33)));
        assert_eq!(record.get("Kp4Hour"), Some(Reading::Present(2.67)));
        assert_eq!(record.get("Kp"), Some(Reading::Present(3.0)));
    }

    #[test]
    fn test_bad_and_short_fields_are_missing() {
        let line = RawLine::tokenize("2021 01 01  0002   59215    120    9   -999.9  bogus");
        let record = DataRecord::map(&line, &PLASMA);
        assert_eq!(record.get("Density"), Some(Reading::Missing));
        assert_eq!(record.get("Speed"), Some(Reading::Missing));
        assert_eq!(record.get("IonTemperature"), Some(Reading::Missing));
        assert!(record.is_empty());
        // Every declared field is still there.
        assert_eq!(record.fields().count(), 3);
    }

    #[test]
    fn test_undeclared_field() {
        let record = DataRecord::missing(&PLASMA);
        assert_eq!(record.get("Bz"), None);
    }

    #[test]
    fn test_parse_feed_orders_records() {
        let text = "# header\n\
            2021 01 01  0000   59215      0    0      5.0      400.0    1.0e+05\n\
            2021 01 01  0001   59215     60    0      6.0      410.0    1.0e+05\n";
        let records = parse_feed(text, &PLASMA);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Density"), Some(Reading::Present(6.0)));
    }

    #[test]
    fn test_serialize_uses_sentinel() {
        let record = DataRecord::missing(&PLASMA);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Speed"], serde_json::json!(-999.9));
    }
}
