use crate::app::state::PanelId;
use crate::weather::WeatherbitClient;
use forecast_core::{ForecastError, WeatherQuery, WeatherResponse, WeatherbitConfig};
use log::debug;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Result of one background fetch, tagged with the panel that asked for it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub panel: PanelId,
    pub result: Result<WeatherResponse, ForecastError>,
}

/// Runs remote fetches off the UI loop and hands results back over a channel.
#[derive(Debug)]
pub struct ForecastActions {
    client: WeatherbitClient,
    sender: UnboundedSender<FetchOutcome>,
    receiver: UnboundedReceiver<FetchOutcome>,
}

impl ForecastActions {
    pub fn new(config: WeatherbitConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            client: WeatherbitClient::new(config),
            sender,
            receiver,
        }
    }

    /// Starts one GET for `panel`. Earlier fetches for the same panel keep
    /// running; whichever completes last is applied last.
    pub fn spawn_fetch(&self, panel: PanelId, query: WeatherQuery) {
        let client = self.client.clone();
        let sender = self.sender.clone();

        debug!("spawning fetch for {panel:?}: {query:?}");
        tokio::spawn(async move {
            let result = client.fetch_forecast(&query).await;
            // The receiver only disappears when the app shuts down
            let _ = sender.send(FetchOutcome { panel, result });
        });
    }

    /// Completed fetches, in completion order, without waiting.
    pub fn drain_completed(&mut self) -> Vec<FetchOutcome> {
        let mut completed = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(outcome) => completed.push(outcome),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        completed
    }

    /// Waits for the next completed fetch.
    pub async fn next_completed(&mut self) -> Option<FetchOutcome> {
        self.receiver.recv().await
    }
}
