use chrono_tz::Tz;
use clap::Parser;
use foobot_sensors::metric::Metric;
use foobot_sensors::platform::DEFAULT_SCAN_INTERVAL;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "FOOBOT_TOKEN")]
    pub token: String,

    #[arg(long, env = "FOOBOT_OWNER")]
    pub owner: Option<String>,

    #[arg(long, env = "TZ")]
    pub timezone: Tz,

    #[arg(long, default_value_t = DEFAULT_SCAN_INTERVAL.as_secs())]
    pub interval_secs: u64,

    #[arg(long = "metric")]
    pub metrics: Vec<Metric>,
}
