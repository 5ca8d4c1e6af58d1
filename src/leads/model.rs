use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire payload for `PATCH /api/leads/{id}/status`
///
/// `status` is forwarded verbatim; the server owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdateRequest<'a> {
    pub status: &'a str,
}

/// Best-effort view of an error body. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPayload {
    /// Only a string `message` counts; `null` or any other type reads as absent
    pub message: Option<String>,
}

/// Parse an error body, returning `None` when it is not a JSON object
pub fn parse_error_payload(body: &[u8]) -> Option<ErrorPayload> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) => Some(ErrorPayload {
            message: map.get("message").and_then(Value::as_str).map(str::to_owned),
        }),
        _ => None,
    }
}

/// Pipeline stages known to the LeadSync backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    Uncontacted,
    Hot,
    Sold,
    NotInterested,
    Blocked,
    WrongInfo,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::Uncontacted,
        LeadStatus::Hot,
        LeadStatus::Sold,
        LeadStatus::NotInterested,
        LeadStatus::Blocked,
        LeadStatus::WrongInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Uncontacted => "UNCONTACTED",
            LeadStatus::Hot => "HOT",
            LeadStatus::Sold => "SOLD",
            LeadStatus::NotInterested => "NOT_INTERESTED",
            LeadStatus::Blocked => "BLOCKED",
            LeadStatus::WrongInfo => "WRONG_INFO",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LeadStatus::Uncontacted => "Not contacted yet",
            LeadStatus::Hot => "Hot lead, a reminder is sent if no sale within a week",
            LeadStatus::Sold => "Sale completed",
            LeadStatus::NotInterested => "Not interested, handed to a super user the next day",
            LeadStatus::Blocked => "Blocked, handed to a super user the next day",
            LeadStatus::WrongInfo => "Wrong contact details, handed to a super user the next day",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLeadStatus(pub String);

impl fmt::Display for UnknownLeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lead status: {}", self.0)
    }
}

impl std::error::Error for UnknownLeadStatus {}

impl FromStr for LeadStatus {
    type Err = UnknownLeadStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLeadStatus(s.to_string()))
    }
}

/// The part of the backend's lead representation a client usually reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Kept as a string so statuses added server-side still decode
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LeadResponse {
    /// The status as a known pipeline stage, if it is one
    pub fn known_status(&self) -> Option<LeadStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}
