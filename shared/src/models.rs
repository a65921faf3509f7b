use serde::{Serialize, Deserialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoterItem {
    pub voter_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub vote_history: Vec<VoterHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoterHistory {
    pub poll_id: i64,
    pub vote_id: i64,
    #[serde(with = "time::serde::rfc3339", default = "OffsetDateTime::now_utc")]
    pub vote_date: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub uptime: u64,
    pub voters_processed: u64,
    pub errors_encountered: u64,
}

impl VoterItem {
    pub fn new(voter_id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            voter_id,
            name: name.into(),
            email: email.into(),
            vote_history: Vec::new(),
        }
    }

    pub fn find_poll(&self, poll_id: i64) -> Option<&VoterHistory> {
        self.vote_history.iter().find(|h| h.poll_id == poll_id)
    }

    pub fn has_poll(&self, poll_id: i64) -> bool {
        self.find_poll(poll_id).is_some()
    }

    pub fn total_votes(&self) -> usize {
        self.vote_history.len()
    }
}

impl VoterHistory {
    pub fn new(poll_id: i64, vote_id: i64) -> Self {
        Self {
            poll_id,
            vote_id,
            vote_date: OffsetDateTime::now_utc(),
        }
    }
}
