use bevy::prelude::*;
use chrono::{DateTime, Utc};
use crossbeam_channel::Receiver;
use serde::Deserialize;
use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::constants;

/// Connection state of the telemetry link, shared with the feed thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Connected,
    Disconnected,
}

/// One decoded change from the telemetry feed.
///
/// Drone names stay raw strings here; the UI-thread sync resolves them
/// against the closed identity set exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryUpdate {
    GlobalLive(bool),
    DroneLive {
        name: String,
        live: bool,
    },
    GpsActive {
        name: String,
        active: bool,
    },
    Position {
        name: String,
        latitude: f64,
        longitude: f64,
        altitude_m: f64,
        updated: Option<String>,
    },
}

/// Wire format of one feed poll. Every field is optional; absent fields
/// produce no update at all, they never mean "clear".
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default)]
    pub global_live: Option<bool>,
    #[serde(default)]
    pub drones: Vec<DroneReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DroneReport {
    pub name: String,
    #[serde(default)]
    pub live: Option<bool>,
    #[serde(default)]
    pub gps_active: Option<bool>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude_m: Option<f64>,
    #[serde(default)]
    pub updated: Option<String>,
}

/// Receiving side of the feed channel plus the shared link indicator.
/// Updated by the background thread, drained by [`super::sync::drain_telemetry`].
#[derive(Resource, Clone)]
pub struct TelemetryInbox {
    pub updates: Receiver<TelemetryUpdate>,
    link: Arc<Mutex<LinkState>>,
    last_rx: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl TelemetryInbox {
    pub fn link_state(&self) -> LinkState {
        self.link
            .lock()
            .map(|state| *state)
            .unwrap_or(LinkState::Disconnected)
    }

    /// Whole seconds since the last successful poll, if there was one.
    pub fn seconds_since_contact(&self) -> Option<i64> {
        let last = self.last_rx.lock().ok().and_then(|stamp| *stamp)?;
        Some((Utc::now() - last).num_seconds().max(0))
    }
}

/// Flatten a snapshot into per-field updates in a stable order: global flag
/// first, then per drone live, GPS, position. A position needs all three
/// coordinates; partial coordinates are dropped.
pub fn snapshot_updates(snapshot: &FeedSnapshot) -> Vec<TelemetryUpdate> {
    let mut updates = Vec::new();
    if let Some(live) = snapshot.global_live {
        updates.push(TelemetryUpdate::GlobalLive(live));
    }
    for report in &snapshot.drones {
        if let Some(live) = report.live {
            updates.push(TelemetryUpdate::DroneLive {
                name: report.name.clone(),
                live,
            });
        }
        if let Some(active) = report.gps_active {
            updates.push(TelemetryUpdate::GpsActive {
                name: report.name.clone(),
                active,
            });
        }
        if let (Some(latitude), Some(longitude), Some(altitude_m)) =
            (report.latitude, report.longitude, report.altitude_m)
        {
            updates.push(TelemetryUpdate::Position {
                name: report.name.clone(),
                latitude,
                longitude,
                altitude_m,
                updated: report.updated.clone(),
            });
        }
    }
    updates
}

/// Start the telemetry feed in a background thread with its own tokio
/// runtime, polling the configured endpoint and forwarding decoded updates
/// over a channel to the UI thread.
pub fn start_feed(mut commands: Commands, app_config: Res<AppConfig>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    let link = Arc::new(Mutex::new(LinkState::Connecting));
    let last_rx = Arc::new(Mutex::new(None));

    let inbox = TelemetryInbox {
        updates: rx,
        link: Arc::clone(&link),
        last_rx: Arc::clone(&last_rx),
    };

    let endpoint = app_config.feed.endpoint_url.clone();
    let interval = std::time::Duration::from_millis(app_config.feed.refresh_interval_ms);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime for telemetry feed: {}", e);
                set_link(&link, LinkState::Disconnected);
                return;
            }
        };

        rt.block_on(async move {
            info!("Starting telemetry feed, polling {}", endpoint);
            let client = reqwest::Client::new();

            loop {
                match poll_once(&client, &endpoint).await {
                    Ok(snapshot) => {
                        set_link(&link, LinkState::Connected);
                        if let Ok(mut stamp) = last_rx.lock() {
                            *stamp = Some(Utc::now());
                        }
                        for update in snapshot_updates(&snapshot) {
                            if tx.send(update).is_err() {
                                // UI side is gone; nothing left to feed.
                                return;
                            }
                        }
                        tokio::time::sleep(interval).await;
                    }
                    Err(e) => {
                        warn!("Telemetry poll failed: {}, retrying...", e);
                        set_link(&link, LinkState::Disconnected);
                        tokio::time::sleep(std::time::Duration::from_secs(
                            constants::FEED_RETRY_SECS,
                        ))
                        .await;
                    }
                }
            }
        });
    });

    commands.insert_resource(inbox);
    info!("Telemetry feed background thread started");
}

async fn poll_once(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<FeedSnapshot, Box<dyn std::error::Error + Send + Sync>> {
    let body = client
        .get(endpoint)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(serde_json::from_str(&body)?)
}

fn set_link(link: &Arc<Mutex<LinkState>>, state: LinkState) {
    if let Ok(mut current) = link.lock() {
        *current = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_decodes_with_absent_fields() {
        let snapshot: FeedSnapshot = serde_json::from_str(
            r#"{ "drones": [ { "name": "Freyja", "gps_active": true } ] }"#,
        )
        .unwrap();
        assert!(snapshot.global_live.is_none());
        assert_eq!(snapshot.drones.len(), 1);
        assert_eq!(snapshot.drones[0].name, "Freyja");
        assert_eq!(snapshot.drones[0].gps_active, Some(true));
        assert!(snapshot.drones[0].latitude.is_none());
    }

    #[test]
    fn gps_flag_precedes_position_for_each_drone() {
        let snapshot: FeedSnapshot = serde_json::from_str(
            r#"{
                "global_live": true,
                "drones": [
                    {
                        "name": "cleo",
                        "live": true,
                        "gps_active": true,
                        "latitude": 12.9716,
                        "longitude": 77.5946,
                        "altitude_m": 45.333,
                        "updated": "10:30:00"
                    }
                ]
            }"#,
        )
        .unwrap();

        let updates = snapshot_updates(&snapshot);
        assert_eq!(updates.len(), 4);
        assert_eq!(updates[0], TelemetryUpdate::GlobalLive(true));
        assert!(matches!(updates[1], TelemetryUpdate::DroneLive { .. }));
        assert!(matches!(updates[2], TelemetryUpdate::GpsActive { .. }));
        assert!(matches!(updates[3], TelemetryUpdate::Position { .. }));
    }

    #[test]
    fn partial_coordinates_produce_no_position_update() {
        let snapshot: FeedSnapshot = serde_json::from_str(
            r#"{ "drones": [ { "name": "freyja", "latitude": 12.0, "longitude": 77.0 } ] }"#,
        )
        .unwrap();
        assert!(snapshot_updates(&snapshot).is_empty());
    }
}
