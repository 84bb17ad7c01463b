//! Knowledge panel.

use tracing::{debug, warn};

use crate::client::{ApiClient, Infobox};

/// What the infobox slot shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InfoboxPanel {
    /// Nothing to show, including "no infobox for this query".
    #[default]
    Hidden,
    Panel(Infobox),
    /// Any failure other than not-found is surfaced.
    Alert(String),
}

impl InfoboxPanel {
    pub async fn load(client: &ApiClient, query: &str) -> Self {
        if query.is_empty() {
            return Self::Hidden;
        }

        match client.infobox(query).await {
            Ok(Some(infobox)) if !infobox.is_empty() => Self::Panel(infobox),
            Ok(_) => {
                debug!("No infobox for '{}'", query);
                Self::Hidden
            }
            Err(e) => {
                warn!("Infobox lookup failed: {}", e);
                Self::Alert(e.to_string())
            }
        }
    }
}
