use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::metric::Metric;

// Column carrying the datapoint timestamp rather than a sensor value.
const TIME_FIELD: &str = "time";

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReadingPayload {
    #[serde(default)]
    sensors: Vec<String>,

    #[serde(default)]
    datapoints: Vec<Vec<Value>>,

    #[serde(default)]
    end: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub measured_at: Option<DateTime<Utc>>,

    pub values: IndexMap<Metric, f64>,
}

impl Reading {
    pub(crate) fn from_payload(payload: ReadingPayload) -> Self {
        let mut measured_at = payload
            .end
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        let mut values = IndexMap::new();

        // Rows are chronological; the last one is the most recent.
        let Some(row) = payload.datapoints.last() else {
            debug!("reading payload contained no datapoints");
            return Self { measured_at, values };
        };

        for (column, field) in payload.sensors.iter().enumerate() {
            let cell = row.get(column);

            if field == TIME_FIELD {
                if let Some(secs) = cell.and_then(Value::as_f64) {
                    measured_at = DateTime::from_timestamp(secs as i64, 0);
                }
                continue;
            }

            let Some(metric) = Metric::from_sensor_field(field) else {
                continue;
            };

            match cell.and_then(Value::as_f64) {
                Some(value) => {
                    values.insert(metric, value);
                }
                None => debug!("dropping non-numeric {field} cell from datapoint"),
            }
        }

        Self { measured_at, values }
    }
}
