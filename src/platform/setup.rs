use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::foobot::{AirQualityApi, ApiError};
use crate::metric::Metric;
use crate::platform::{PlatformConfig, SensorEntity};

pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Ready { entities: usize },
    Aborted,
}

#[derive(Debug, Error)]
#[error("platform is not ready: {0}")]
pub struct PlatformNotReady(#[from] pub ApiError);

pub trait EntitySink {
    fn add_entities(&mut self, entities: Vec<SensorEntity>);
}

impl<F: FnMut(Vec<SensorEntity>)> EntitySink for F {
    fn add_entities(&mut self, entities: Vec<SensorEntity>) {
        self(entities);
    }
}

pub async fn setup_platform<A: AirQualityApi, S: EntitySink>(
    api: &A,
    config: &PlatformConfig,
    sink: &mut S,
) -> Result<SetupOutcome, PlatformNotReady> {
    let devices = match api.devices(config.owner_selector()).await {
        Ok(devices) => devices,
        Err(err) if err.is_retryable() => {
            error!("failed to connect to Foobot servers: {err}");
            return Err(PlatformNotReady(err));
        }
        Err(err) => {
            error!("failed to fetch data from Foobot servers: {err}");
            return Ok(SetupOutcome::Aborted);
        }
    };

    debug!("found {} Foobot devices", devices.len());

    let mut entities = Vec::with_capacity(devices.len() * Metric::ALL.len());
    for device in devices {
        for metric in Metric::ALL {
            entities.push(SensorEntity::new(&config.platform, device.clone(), metric));
        }
    }

    // Entities carry their first value before they are handed over.
    for entity in &mut entities {
        if let Err(err) = entity.refresh(api).await {
            warn!("initial update of {} failed: {err}", entity.object_id());
        }
    }

    let count = entities.len();
    sink.add_entities(entities);

    Ok(SetupOutcome::Ready { entities: count })
}
