use reqwest::Client;

use forecaster_core::types::{PredictionRequest, PredictionResponse};

/// Request a forecast and print the result.
pub async fn run(base_url: &str, ad_spend: f64, summary: bool) -> anyhow::Result<()> {
    let request = validate(ad_spend)?;

    let resp = Client::new()
        .post(format!("{base_url}/predict"))
        .json(&request)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await?;
        anyhow::bail!("Failed to get prediction ({status}): {body}");
    }

    let prediction: PredictionResponse = resp.json().await?;
    tracing::debug!(?prediction, "prediction response");

    if summary {
        println!("{}", format_summary(&prediction));
    } else {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    }

    Ok(())
}

/// Reject spend values the server would happily scale but that make no sense to forecast.
fn validate(ad_spend: f64) -> anyhow::Result<PredictionRequest> {
    if !ad_spend.is_finite() || ad_spend <= 0.0 {
        anyhow::bail!("Please enter a valid ad spend amount (got {ad_spend})");
    }
    Ok(PredictionRequest { ad_spend })
}

fn format_summary(prediction: &PredictionResponse) -> String {
    format!(
        "Forecast Results\n  Predicted Revenue: {}\n  Confidence Score:  {:.1}%",
        format_currency(prediction.predicted_revenue),
        prediction.confidence_score * 100.0
    )
}

/// `$1,234.56` style, two decimals with thousands separators.
fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
