//! Fetch everything the API knows about one location.
//!
//! Run with `cargo run --example local_weather`.

use bom_core::{Client, Location, LocationResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // client.search_locations("Cordeaux Heights").await?;
    let result = LocationResult {
        id: Some("Cordeaux Heights-r3gk01s".into()),
        geohash: "r3gk01s".into(),
        state: Some("NSW".into()),
        name: Some("Cordeaux Heights".into()),
        postcode: Some("2526".into()),
    };

    let location = Location::from_result(&client, &result);

    println!("{:#?}", location.info().await?);
    println!("{:#?}", location.warnings().await?);
    println!("{:#?}", location.observations().await?);
    println!("{:#?}", location.forecast_daily().await?);
    println!("{:#?}", location.forecast_3_hourly().await?);

    Ok(())
}
