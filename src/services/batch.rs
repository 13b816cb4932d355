//! Concurrent multi-city fetch: fan-out one task per city, fan-in over a
//! channel.
//!
//! Each city gets its own task and its own clone of the result sender. A
//! task that fails logs the error and sends nothing; either way its sender
//! clone is dropped when the task ends, including on panic. The receiver
//! therefore yields `None` exactly when every dispatched task has reached a
//! terminal state, which is what makes batch completion deterministic: no
//! early return on partial completion, no leaked task left behind.

use crate::models::WeatherRecord;
use crate::services::WeatherProvider;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fetch current weather for every city concurrently and collect the
/// successful records.
///
/// Never fails as a whole: a per-city failure is logged and excluded from
/// the result, so `result.len() <= cities.len()`. Duplicate city names are
/// fetched independently. Result order is arrival order, not input order.
pub async fn fetch_all<P>(provider: Arc<P>, cities: &[String]) -> Vec<WeatherRecord>
where
    P: WeatherProvider + ?Sized + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    for city in cities {
        let provider = Arc::clone(&provider);
        let tx = tx.clone();
        let city = city.clone();
        tokio::spawn(async move {
            match provider.fetch_city(&city).await {
                Ok(record) => {
                    // The receiver outlives every sender, so this only
                    // errors if the caller itself went away
                    let _ = tx.send(record);
                }
                Err(err) => {
                    tracing::warn!(city = %city, error = %err, "skipping city after failed fetch");
                }
            }
        });
    }

    // Drop the original sender; the channel now closes once the last task
    // finishes, success or failure
    drop(tx);

    let mut records = Vec::with_capacity(cities.len());
    while let Some(record) = rx.recv().await {
        records.push(record);
    }
    records
}
