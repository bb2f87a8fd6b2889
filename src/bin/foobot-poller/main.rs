mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result, bail};
use args::Args;
use chrono_tz::Tz;
use clap::Parser as _;
use foobot_sensors::{
    foobot::{DEFAULT_TIMEOUT, FoobotClient},
    platform::{PlatformConfig, SensorEntity, SetupOutcome, setup_platform},
};
use tokio::time::{Duration, sleep};

const SETUP_RETRY_DELAY: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let http = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;
    let client = FoobotClient::new(http, args.token.as_str());

    let config = PlatformConfig {
        platform: "foobot".to_string(),
        token: args.token,
        owner: args.owner,
    };

    let mut entities = setup(&client, &config).await?;

    if !args.metrics.is_empty() {
        entities.retain(|e| args.metrics.contains(&e.metric()));
    }

    if entities.is_empty() {
        bail!("no entities to poll");
    }

    let interval = Duration::from_secs(args.interval_secs);

    loop {
        print_entities(&entities, args.timezone);

        sleep(interval).await;

        for entity in &mut entities {
            if let Err(err) = entity.refresh(&client).await {
                if err.is_retryable() {
                    eprintln!("refresh of {} failed: {err}", entity.object_id());
                    continue;
                }

                return Err(err).with_context(|| {
                    format!("Foobot rejected the request for {}", entity.object_id())
                });
            }
        }
    }
}

async fn setup(client: &FoobotClient, config: &PlatformConfig) -> Result<Vec<SensorEntity>> {
    loop {
        let mut entities = Vec::new();
        let mut sink = |new: Vec<SensorEntity>| entities.extend(new);

        match setup_platform(client, config, &mut sink).await {
            Ok(SetupOutcome::Ready { .. }) => return Ok(entities),
            Ok(SetupOutcome::Aborted) => bail!("Foobot rejected the configured credentials"),
            Err(err) => {
                eprintln!("{err}, retrying in {}s", SETUP_RETRY_DELAY.as_secs());
                sleep(SETUP_RETRY_DELAY).await;
            }
        }
    }
}

fn print_entities(entities: &[SensorEntity], timezone: Tz) {
    println!();
    for entity in entities {
        let state = entity.state().unwrap_or_else(|| "unknown".to_string());
        let updated_at = match entity.updated_at() {
            Some(at) => at
                .with_timezone(&timezone)
                .format("%Y-%m-%d %H:%M:%S %Z")
                .to_string(),
            None => "never".to_string(),
        };

        println!(
            "{}: {} {} ({})",
            entity.object_id(),
            state,
            entity.unit(),
            updated_at
        );
    }
}
