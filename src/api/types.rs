//! API request and response type definitions.

use serde::{Deserialize, Serialize};

/// DeliveryInfo.aspx response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryInfoResponse {
    pub delivery: Delivery,
}

/// Playback information for one session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Delivery {
    #[serde(default)]
    pub streams: Vec<Stream>,
}

/// A playable stream, in the order the server lists them.
#[derive(Debug, Clone, Deserialize)]
pub struct Stream {
    #[serde(rename = "StreamUrl")]
    pub url: String,
}

impl DeliveryInfoResponse {
    /// URL of the first listed stream.
    pub fn first_stream_url(&self) -> Option<&str> {
        self.delivery.streams.first().map(|s| s.url.as_str())
    }
}

/// GetSessions request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsRequest<'a> {
    pub query_parameters: SessionsQuery<'a>,
}

/// Folder query sent to GetSessions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsQuery<'a> {
    #[serde(rename = "folderID")]
    pub folder_id: &'a str,
    /// The endpoint expects the string "true", not a JSON boolean.
    pub get_folder_data: &'static str,
    pub max_results: u32,
}

impl<'a> SessionsRequest<'a> {
    pub fn new(folder_id: &'a str, max_results: u32) -> Self {
        Self {
            query_parameters: SessionsQuery {
                folder_id,
                get_folder_data: "true",
                max_results,
            },
        }
    }
}

/// GetSessions response, wrapped in the WCF `d` envelope.
#[derive(Debug, Deserialize)]
pub struct SessionsResponse {
    pub d: SessionsData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionsData {
    /// Null for empty folders.
    #[serde(default)]
    pub results: Option<Vec<SessionEntry>>,
}

/// One row of a folder listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionEntry {
    #[serde(rename = "SessionName")]
    pub name: String,
    #[serde(rename = "DeliveryID")]
    pub delivery_id: String,
}

/// A recorded session to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub id: String,
}

impl From<SessionEntry> for Session {
    fn from(entry: SessionEntry) -> Self {
        Self {
            name: entry.name,
            id: entry.delivery_id,
        }
    }
}

impl SessionsResponse {
    /// Sessions in server order.
    pub fn into_sessions(self) -> Vec<Session> {
        self.d
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Session::from)
            .collect()
    }
}
