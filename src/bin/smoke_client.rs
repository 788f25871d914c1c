//! Posts two sample reservations to a running schedule service, one without
//! and one with a callback target, and logs what comes back.

use std::time::Duration;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};

#[derive(Parser, Clone, Debug)]
struct Args {
    #[clap(env = "SCHEDULE_SERVICE_URL", long, default_value = "http://localhost:3000/")]
    url: String,

    #[clap(env, long, default_value_t = 1)]
    timeout_secs: u64,
}

fn reservation_request(start: OffsetDateTime, end: OffsetDateTime, target: Option<Value>) -> anyhow::Result<Value> {
    let mut attributes = json!({
        "startTime": start.format(&Rfc3339).context("Failed to format start time")?,
        "endTime": end.format(&Rfc3339).context("Failed to format end time")?,
    });
    if let Some(target) = target {
        attributes["target"] = target;
    }

    Ok(json!({
        "data": {
            "type": "reservation",
            "attributes": attributes,
        }
    }))
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let now = OffsetDateTime::now_utc();
    let end = now + time::Duration::hours(1);
    let requests = [
        reservation_request(now, end, None)?,
        reservation_request(now, end, Some(json!({
            "httpMethod": "POST",
            "urlTemplate": "http://example.com/reservation/{id}?status={status}",
        })))?,
    ];

    for request in requests {
        let response = client
            .post(&args.url)
            .json(&request)
            .send()
            .with_context(|| format!("Failed to reach schedule service at {}", args.url))?;

        let status = response.status();
        let body: Value = response.json().context("Response body was not JSON")?;
        if status.is_success() {
            info!("{} {}", status, body);
        } else {
            warn!("{} {}", status, body);
        }
    }

    Ok(())
}
