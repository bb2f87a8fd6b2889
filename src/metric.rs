use std::str::FromStr;

use anyhow::{Error, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Co2,
    Temperature,
    Humidity,
    Pm25,
    Voc,
    Index,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Co2,
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pm25,
        Metric::Voc,
        Metric::Index,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Co2 => "co2",
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Pm25 => "pm2_5",
            Metric::Voc => "voc",
            Metric::Index => "index",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Co2 => "CO2",
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Pm25 => "PM2.5",
            Metric::Voc => "VOC",
            Metric::Index => "Index",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Co2 => "ppm",
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Pm25 => "µg/m³",
            Metric::Voc => "ppb",
            Metric::Index => "%",
        }
    }

    // Column names used by the datapoint endpoint.
    pub fn sensor_field(&self) -> &'static str {
        match self {
            Metric::Co2 => "co2",
            Metric::Temperature => "tmp",
            Metric::Humidity => "hum",
            Metric::Pm25 => "pm",
            Metric::Voc => "voc",
            Metric::Index => "allpollu",
        }
    }

    pub fn from_sensor_field(field: &str) -> Option<Metric> {
        match field {
            "co2" => Some(Metric::Co2),
            "tmp" => Some(Metric::Temperature),
            "hum" => Some(Metric::Humidity),
            "pm" => Some(Metric::Pm25),
            "voc" => Some(Metric::Voc),
            "allpollu" => Some(Metric::Index),
            _ => None,
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "co2" => Ok(Metric::Co2),
            "temperature" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            "pm2_5" => Ok(Metric::Pm25),
            "voc" => Ok(Metric::Voc),
            "index" => Ok(Metric::Index),
            _ => bail!("unknown metric: {}", s),
        }
    }
}
