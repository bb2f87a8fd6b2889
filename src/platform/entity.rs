use chrono::{DateTime, Utc};
use tracing::debug;

use crate::foobot::{AirQualityApi, ApiError, Device, Reading};
use crate::metric::Metric;

#[derive(Debug, Clone)]
pub struct SensorEntity {
    platform: String,
    device: Device,
    metric: Metric,
    value: Option<f64>,
    updated_at: Option<DateTime<Utc>>,
}

impl SensorEntity {
    pub fn new(platform: &str, device: Device, metric: Metric) -> Self {
        Self {
            platform: platform.to_string(),
            device,
            metric,
            value: None,
            updated_at: None,
        }
    }

    pub fn object_id(&self) -> String {
        format!(
            "{}_{}_{}",
            slugify(&self.platform),
            slugify(&self.device.name),
            self.metric.key()
        )
    }

    pub fn name(&self) -> String {
        format!(
            "{} {} {}",
            self.platform,
            self.device.name,
            self.metric.label()
        )
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn unit(&self) -> &'static str {
        self.metric.unit()
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn state(&self) -> Option<String> {
        self.value.map(|value| format!("{value:.1}"))
    }

    pub fn apply(&mut self, reading: &Reading) -> bool {
        let Some(value) = reading.values.get(&self.metric) else {
            return false;
        };

        self.value = Some(*value);
        self.updated_at = Some(reading.measured_at.unwrap_or_else(Utc::now));
        true
    }

    pub async fn refresh(&mut self, api: &impl AirQualityApi) -> Result<(), ApiError> {
        let reading = api.latest_reading(&self.device.uuid).await?;

        if !self.apply(&reading) {
            debug!(
                "no {} value in the latest reading for {}",
                self.metric.key(),
                self.device.name
            );
        }

        Ok(())
    }
}

fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }

    slug.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn device(name: &str) -> Device {
        Device {
            uuid: "1234127987696425".to_string(),
            name: name.to_string(),
            mac: None,
        }
    }

    fn reading(metric: Metric, value: f64) -> Reading {
        let mut values = IndexMap::new();
        values.insert(metric, value);

        Reading {
            measured_at: DateTime::from_timestamp(1518131274, 0),
            values,
        }
    }

    #[test]
    fn object_id_is_slugged() {
        let entity = SensorEntity::new("foobot", device("Living Room"), Metric::Pm25);

        assert_eq!(entity.object_id(), "foobot_living_room_pm2_5");
    }

    #[test]
    fn name_keeps_the_display_labels() {
        let entity = SensorEntity::new("foobot", device("happybot"), Metric::Co2);

        assert_eq!(entity.name(), "foobot happybot CO2");
    }

    #[test]
    fn unit_comes_from_the_metric_table() {
        let entity = SensorEntity::new("foobot", device("happybot"), Metric::Voc);

        assert_eq!(entity.unit(), "ppb");
    }

    #[test]
    fn state_is_unknown_before_the_first_reading() {
        let entity = SensorEntity::new("foobot", device("happybot"), Metric::Co2);

        assert_eq!(entity.state(), None);
        assert_eq!(entity.updated_at(), None);
    }

    #[test]
    fn state_renders_one_decimal() {
        let mut entity = SensorEntity::new("foobot", device("happybot"), Metric::Co2);

        assert!(entity.apply(&reading(Metric::Co2, 1232.0)));
        assert_eq!(entity.state(), Some("1232.0".to_string()));

        assert!(entity.apply(&reading(Metric::Co2, 21.07)));
        assert_eq!(entity.state(), Some("21.1".to_string()));
    }

    #[test]
    fn apply_skips_a_reading_without_the_metric() {
        let mut entity = SensorEntity::new("foobot", device("happybot"), Metric::Humidity);

        assert!(entity.apply(&reading(Metric::Humidity, 49.5)));
        assert!(!entity.apply(&reading(Metric::Co2, 1232.0)));
        assert_eq!(entity.state(), Some("49.5".to_string()));
    }

    #[test]
    fn apply_records_the_measurement_time() {
        let mut entity = SensorEntity::new("foobot", device("happybot"), Metric::Co2);
        let expected = DateTime::from_timestamp(1518131274, 0);

        entity.apply(&reading(Metric::Co2, 1232.0));

        assert_eq!(entity.updated_at(), expected);
    }
}
