use log::{error, info};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::{components::tracker::PriceTracker, models::table::PriceTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCommand {
    Refresh,
}

/// What a display layer should currently show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayState {
    Pending,
    Ready { table: PriceTable },
    Failed { message: String },
}

/// Runs the price pipeline on request and keeps only the latest outcome.
///
/// Overlapping refreshes are not serialized; whichever finishes last is what gets shown.
pub struct RefreshController {
    tracker: PriceTracker,
    state: RwLock<DisplayState>,
}

impl RefreshController {
    pub fn new(tracker: PriceTracker) -> Self {
        RefreshController {
            tracker,
            state: RwLock::new(DisplayState::Pending),
        }
    }

    pub async fn handle(&self, command: RefreshCommand) -> DisplayState {
        match command {
            RefreshCommand::Refresh => {
                let next = match self.tracker.get_current_price_table().await {
                    Ok(table) => {
                        let missing = table.missing(self.tracker.requested());
                        if !missing.is_empty() {
                            info!("refresh returned no price for {:?}", missing);
                        }

                        DisplayState::Ready { table }
                    }
                    Err(e) => {
                        error!("refresh prices error: {}", e);

                        DisplayState::Failed {
                            message: e.to_string(),
                        }
                    }
                };

                *self.state.write().await = next.clone();

                next
            }
        }
    }

    pub async fn state(&self) -> DisplayState {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerConfig;
    use mockito::{Matcher, Server};

    const PRICE_PATH: &str = "/api/v3/simple/price";

    fn controller(endpoint: &str) -> RefreshController {
        let config = TrackerConfig::new(endpoint, ["bitcoin", "ethereum"], "usd").unwrap();

        RefreshController::new(PriceTracker::new(config))
    }

    #[tokio::test]
    async fn test_starts_pending() {
        let controller = controller("http://127.0.0.1:1/api/v3/simple/price");

        assert_eq!(controller.state().await, DisplayState::Pending);
    }

    #[tokio::test]
    async fn test_refresh_replaces_state() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PRICE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"bitcoin": {"usd": 50000}, "ethereum": {"usd": 3000}}"#)
            .create_async()
            .await;

        let controller = controller(&format!("{}{}", server.url(), PRICE_PATH));
        let state = controller.handle(RefreshCommand::Refresh).await;

        match &state {
            DisplayState::Ready { table } => assert_eq!(table.len(), 2),
            other => panic!("Expected Ready state, got {:?}", other),
        }
        assert_eq!(controller.state().await, state);
    }

    #[tokio::test]
    async fn test_failed_refresh_discards_previous_table() {
        let mut server = Server::new_async().await;
        let ok = server
            .mock("GET", PRICE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"bitcoin": {"usd": 50000}}"#)
            .expect(1)
            .create_async()
            .await;

        let controller = controller(&format!("{}{}", server.url(), PRICE_PATH));
        controller.handle(RefreshCommand::Refresh).await;
        ok.assert_async().await;
        ok.remove_async().await;

        let _broken = server
            .mock("GET", PRICE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"bitcoin": {}}"#)
            .create_async()
            .await;

        let state = controller.handle(RefreshCommand::Refresh).await;

        assert!(matches!(state, DisplayState::Failed { .. }));
        assert!(matches!(
            controller.state().await,
            DisplayState::Failed { .. }
        ));
    }

    #[test]
    fn test_state_serialization() {
        let state = DisplayState::Failed {
            message: "transport error: refused".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({ "status": "failed", "message": "transport error: refused" })
        );
        assert_eq!(
            serde_json::to_value(DisplayState::Pending).unwrap(),
            serde_json::json!({ "status": "pending" })
        );
    }
}
