use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::model::Comic;

/// Handle for one outstanding query. Only the newest ticket may publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub query: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    pub is_loading: bool,
    /// `None` until a search completes, or after the results are cleared.
    pub results: Option<Vec<Comic>>,
}

#[derive(Default)]
struct FeedState {
    issued: u64,
    settled: u64,
    query: String,
    results: Option<Vec<Comic>>,
}

/// Latest AI results shared by the home, detail and reader views.
///
/// Responses are applied in request order: a response whose generation is
/// older than the newest issued one is dropped, so a slow early query can't
/// overwrite a fast later one.
#[derive(Default)]
pub struct RecommendationFeed {
    state: RwLock<FeedState>,
}

impl RecommendationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, query: &str) -> Ticket {
        let mut state = self.state.write().await;
        state.issued += 1;
        state.query = query.to_string();

        Ticket {
            generation: state.issued,
            query: query.to_string(),
        }
    }

    /// Publishes the results if the ticket is still the newest. Returns whether
    /// they were applied.
    pub async fn complete(&self, ticket: &Ticket, results: Vec<Comic>) -> bool {
        let mut state = self.state.write().await;

        if ticket.generation != state.issued {
            tracing::debug!(
                generation = ticket.generation,
                latest = state.issued,
                "Dropping superseded recommendations"
            );
            return false;
        }

        state.settled = ticket.generation;
        state.results = Some(results);
        true
    }

    /// Drops the results and supersedes any query still in flight.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.issued += 1;
        state.settled = state.issued;
        state.query.clear();
        state.results = None;
    }

    pub async fn snapshot(&self) -> SearchState {
        let state = self.state.read().await;

        SearchState {
            query: state.query.clone(),
            is_loading: state.settled < state.issued,
            results: state.results.clone(),
        }
    }

    pub async fn results(&self) -> Option<Vec<Comic>> {
        self.state.read().await.results.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Comic> {
        self.state
            .read()
            .await
            .results
            .as_ref()?
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}
