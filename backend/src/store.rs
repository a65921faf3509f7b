use redis::{aio::ConnectionManager, AsyncCommands, Client};
use shared::models::{VoterHistory, VoterItem};
use tracing::{debug, info};

use crate::error::ApiError;

pub const KEY_PREFIX: &str = "voters:";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";

pub fn voter_key(id: i64) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[derive(Clone)]
pub struct VoterStore {
    conn: ConnectionManager,
}

impl VoterStore {
    pub async fn from_env() -> Result<Self, ApiError> {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        info!("using voter store at {url}");
        Self::connect(&url).await
    }

    pub async fn connect(url: &str) -> Result<Self, ApiError> {
        let client = Client::open(url).map_err(|e| ApiError::Internal(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(Self { conn })
    }

    async fn read_voter(&self, key: &str) -> Result<Option<VoterItem>, ApiError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        match raw {
            Some(doc) => serde_json::from_str(&doc)
                .map(Some)
                .map_err(|e| ApiError::Internal(e.to_string())),
            None => Ok(None),
        }
    }

    // Full-document overwrite; there is no partial update.
    async fn write_voter(&self, voter: &VoterItem) -> Result<(), ApiError> {
        let doc = serde_json::to_string(voter).map_err(|e| ApiError::Internal(e.to_string()))?;
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(voter_key(voter.voter_id), doc)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }

    pub async fn add_voter(&self, voter: &VoterItem) -> Result<(), ApiError> {
        if self.read_voter(&voter_key(voter.voter_id)).await?.is_some() {
            return Err(ApiError::VoterExists);
        }
        self.write_voter(voter).await
    }

    pub async fn update_voter(&self, voter: &VoterItem) -> Result<(), ApiError> {
        if self.read_voter(&voter_key(voter.voter_id)).await?.is_none() {
            return Err(ApiError::VoterNotFound);
        }
        self.write_voter(voter).await
    }

    pub async fn get_voter(&self, id: i64) -> Result<VoterItem, ApiError> {
        self.read_voter(&voter_key(id))
            .await?
            .ok_or(ApiError::VoterNotFound)
    }

    pub async fn delete_voter(&self, id: i64) -> Result<(), ApiError> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn
            .del(voter_key(id))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        if removed == 0 {
            return Err(ApiError::VoterNotFound);
        }
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, ApiError> {
        let keys = self.voter_keys().await?;
        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn.clone();
        let removed: u64 = conn
            .del(&keys)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        debug!("removed {removed} of {} voter keys", keys.len());
        Ok(removed)
    }

    pub async fn get_all_voters(&self) -> Result<Vec<VoterItem>, ApiError> {
        let keys = self.voter_keys().await?;
        let mut voters = Vec::with_capacity(keys.len());
        for key in keys {
            // A key can disappear between the scan and the fetch.
            if let Some(voter) = self.read_voter(&key).await? {
                voters.push(voter);
            }
        }
        Ok(voters)
    }

    async fn voter_keys(&self) -> Result<Vec<String>, ApiError> {
        let mut conn = self.conn.clone();
        conn.keys(format!("{KEY_PREFIX}*"))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }

    pub async fn get_history(&self, voter_id: i64) -> Result<Vec<VoterHistory>, ApiError> {
        Ok(self.get_voter(voter_id).await?.vote_history)
    }

    pub async fn get_poll(&self, voter_id: i64, poll_id: i64) -> Result<VoterHistory, ApiError> {
        let voter = self.get_voter(voter_id).await?;
        voter
            .vote_history
            .into_iter()
            .find(|h| h.poll_id == poll_id)
            .ok_or(ApiError::PollNotFound)
    }

    pub async fn add_poll(
        &self,
        voter_id: i64,
        entry: VoterHistory,
    ) -> Result<VoterHistory, ApiError> {
        let mut voter = self.get_voter(voter_id).await?;
        if voter.has_poll(entry.poll_id) {
            return Err(ApiError::PollExists);
        }
        voter.vote_history.push(entry.clone());
        self.write_voter(&voter).await?;
        Ok(entry)
    }

    pub async fn update_poll(
        &self,
        voter_id: i64,
        poll_id: i64,
        entry: VoterHistory,
    ) -> Result<VoterHistory, ApiError> {
        let mut voter = self.get_voter(voter_id).await?;
        let slot = voter
            .vote_history
            .iter_mut()
            .find(|h| h.poll_id == poll_id)
            .ok_or(ApiError::PollNotFound)?;
        *slot = entry.clone();
        self.write_voter(&voter).await?;
        Ok(entry)
    }

    pub async fn delete_poll(&self, voter_id: i64, poll_id: i64) -> Result<(), ApiError> {
        let mut voter = self.get_voter(voter_id).await?;
        let before = voter.vote_history.len();
        voter.vote_history.retain(|h| h.poll_id != poll_id);
        if voter.vote_history.len() == before {
            return Err(ApiError::PollNotFound);
        }
        self.write_voter(&voter).await
    }
}
