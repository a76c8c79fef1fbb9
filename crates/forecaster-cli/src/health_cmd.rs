use reqwest::Client;

use forecaster_core::types::HealthStatus;

/// Query the health endpoint and print the payload.
pub async fn run(base_url: &str) -> anyhow::Result<()> {
    let resp = Client::new().get(format!("{base_url}/")).send().await?;

    if !resp.status().is_success() {
        let body = resp.text().await?;
        anyhow::bail!("Server unhealthy: {body}");
    }

    let status: HealthStatus = resp.json().await?;
    tracing::debug!(?status, "health response");
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
