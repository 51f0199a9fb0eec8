//! Usage gate: one successful AI interaction per client per cooldown window.

use std::collections::HashMap;

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

pub mod handlers;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
const ANONYMOUS_CLIENT: &str = "anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatus {
    pub locked: bool,
    pub retry_after_secs: i64,
    /// Remaining cooldown as `HH:MM:SS`.
    pub time_left: String,
}

impl UsageStatus {
    fn unlocked() -> Self {
        Self {
            locked: false,
            retry_after_secs: 0,
            time_left: format_hms(0),
        }
    }
}

pub struct UsageGate {
    cooldown: Duration,
    last_used: Mutex<HashMap<String, DateTime<Utc>>>,
}

/// Slot held by an in-flight AI turn. A reserved client reads as locked.
/// Hand it back through `commit` or `release`.
#[must_use = "a reservation must be committed or released"]
#[derive(Debug)]
pub struct Reservation {
    client: String,
    reserved_at: DateTime<Utc>,
}

impl UsageGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_used: Mutex::new(HashMap::new()),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    fn remaining_secs(&self, used_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        (used_at + self.cooldown - now).num_seconds()
    }

    fn locked_status(remaining: i64) -> UsageStatus {
        UsageStatus {
            locked: true,
            retry_after_secs: remaining,
            time_left: format_hms(remaining),
        }
    }

    fn prune(&self, last_used: &mut HashMap<String, DateTime<Utc>>, now: DateTime<Utc>) {
        let before = last_used.len();
        last_used.retain(|_, used_at| self.remaining_secs(*used_at, now) > 0);
        let dropped = before - last_used.len();
        if dropped > 0 {
            debug!(dropped, remaining = last_used.len(), "Pruned expired usage entries");
        }
    }

    /// Current cooldown state. Expired timestamps are dropped on sight.
    pub async fn status(&self, client: &str, now: DateTime<Utc>) -> UsageStatus {
        let mut last_used = self.last_used.lock().await;
        let Some(&used_at) = last_used.get(client) else {
            return UsageStatus::unlocked();
        };

        let remaining = self.remaining_secs(used_at, now);
        if remaining <= 0 {
            last_used.remove(client);
            return UsageStatus::unlocked();
        }

        Self::locked_status(remaining)
    }

    /// Checks the cooldown and claims the client's slot under one lock, so
    /// concurrent turns from the same client cannot both get through.
    pub async fn try_begin(
        &self,
        client: &str,
        now: DateTime<Utc>,
    ) -> Result<Reservation, UsageStatus> {
        let mut last_used = self.last_used.lock().await;
        self.prune(&mut last_used, now);

        if let Some(&used_at) = last_used.get(client) {
            return Err(Self::locked_status(self.remaining_secs(used_at, now)));
        }

        last_used.insert(client.to_string(), now);
        Ok(Reservation {
            client: client.to_string(),
            reserved_at: now,
        })
    }

    /// The turn succeeded: the cooldown runs from `now`.
    pub async fn commit(&self, reservation: Reservation, now: DateTime<Utc>) {
        self.record(&reservation.client, now).await;
    }

    /// The turn failed: free the slot without starting a cooldown.
    pub async fn release(&self, reservation: Reservation) {
        let mut last_used = self.last_used.lock().await;
        if last_used.get(&reservation.client) == Some(&reservation.reserved_at) {
            last_used.remove(&reservation.client);
        }
    }

    /// Starts (or restarts) the cooldown for a client.
    pub async fn record(&self, client: &str, now: DateTime<Utc>) {
        let mut last_used = self.last_used.lock().await;
        self.prune(&mut last_used, now);
        last_used.insert(client.to_string(), now);
    }

    pub async fn reset(&self, client: &str) -> bool {
        self.last_used.lock().await.remove(client).is_some()
    }

    #[cfg(test)]
    pub async fn tracked_clients(&self) -> usize {
        self.last_used.lock().await.len()
    }
}

/// Client id from the `x-client-id` header; blank or missing maps to "anonymous".
pub fn client_id(headers: &HeaderMap) -> String {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

fn format_hms(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
