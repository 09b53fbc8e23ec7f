use serde::Deserialize;
use std::time::Duration;
use tokio::sync::mpsc;

/// Shown until (and unless) the lookup produces a real place name.
pub const PLACEHOLDER: &str = "Local Time";

const GEO_ENDPOINT: &str = "http://ip-api.com/json";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct GeoResponse {
    status: String,
    city: Option<String>,
    country: Option<String>,
}

/// Best-effort IP geolocation for the clock's location label.
///
/// Runs once at startup; the label is sent back to the UI over the channel.
/// Every failure path just logs a warning and sends nothing, leaving the
/// placeholder in place. Purely cosmetic, so nothing here is an error.
pub async fn lookup(tx: mpsc::Sender<String>) {
    match fetch_label().await {
        Ok(Some(label)) => {
            let _ = tx.send(label).await;
        }
        Ok(None) => {
            log::warn!("geolocation lookup returned no usable place name");
        }
        Err(e) => {
            log::warn!("geolocation lookup failed: {}", e);
        }
    }
}

async fn fetch_label() -> Result<Option<String>, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(LOOKUP_TIMEOUT)
        .build()?;
    let geo: GeoResponse = client.get(GEO_ENDPOINT).send().await?.json().await?;
    if geo.status != "success" {
        return Ok(None);
    }
    Ok(compose_label(geo.city, geo.country))
}

fn compose_label(city: Option<String>, country: Option<String>) -> Option<String> {
    let city = city.filter(|c| !c.is_empty());
    let country = country.filter(|c| !c.is_empty());
    match (city, country) {
        (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
        (Some(city), None) => Some(city),
        (None, Some(country)) => Some(country),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_composition() {
        assert_eq!(
            compose_label(Some("Lisbon".into()), Some("Portugal".into())),
            Some("Lisbon, Portugal".into())
        );
        assert_eq!(compose_label(Some("Lisbon".into()), None), Some("Lisbon".into()));
        assert_eq!(compose_label(None, Some("Portugal".into())), Some("Portugal".into()));
        assert_eq!(compose_label(None, None), None);
        assert_eq!(compose_label(Some(String::new()), Some(String::new())), None);
    }
}
