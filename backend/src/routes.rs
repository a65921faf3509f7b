use rocket::{State, delete, get, post, put, serde::json::Json};
use tracing::{info, instrument};

use crate::{error::ApiError, store::VoterStore, utils::parse_id};
use shared::models::{HealthReport, VoterHistory, VoterItem};

pub struct AppState {
    pub store: VoterStore,
}

impl AppState {
    pub fn new(store: VoterStore) -> Self {
        Self { store }
    }
}

#[get("/")]
pub async fn list_voters(state: &State<AppState>) -> Result<Json<Vec<VoterItem>>, ApiError> {
    state.store.get_all_voters().await.map(Json)
}

#[get("/<id>")]
pub async fn get_voter(state: &State<AppState>, id: &str) -> Result<Json<VoterItem>, ApiError> {
    let voter_id = parse_id(id)?;
    state.store.get_voter(voter_id).await.map(Json)
}

#[instrument(skip(state, voter))]
#[post("/", format = "json", data = "<voter>")]
pub async fn create_voter(
    state: &State<AppState>,
    voter: Json<VoterItem>,
) -> Result<Json<VoterItem>, ApiError> {
    let voter = voter.into_inner();
    state.store.add_voter(&voter).await?;
    info!("added voter {}", voter.voter_id);
    Ok(Json(voter))
}

#[put("/", format = "json", data = "<voter>")]
pub async fn update_voter(
    state: &State<AppState>,
    voter: Json<VoterItem>,
) -> Result<Json<VoterItem>, ApiError> {
    let voter = voter.into_inner();
    state.store.update_voter(&voter).await?;
    info!("updated voter {}", voter.voter_id);
    Ok(Json(voter))
}

#[delete("/<id>")]
pub async fn delete_voter(state: &State<AppState>, id: &str) -> Result<&'static str, ApiError> {
    let voter_id = parse_id(id)?;
    state.store.delete_voter(voter_id).await?;
    info!("deleted voter {voter_id}");
    Ok("Delete OK")
}

#[delete("/")]
pub async fn delete_all_voters(state: &State<AppState>) -> Result<&'static str, ApiError> {
    let removed = state.store.delete_all().await?;
    info!("deleted all voters ({removed} removed)");
    Ok("Delete All OK")
}

#[get("/<id>/polls")]
pub async fn get_voter_polls(
    state: &State<AppState>,
    id: &str,
) -> Result<Json<Vec<VoterHistory>>, ApiError> {
    let voter_id = parse_id(id)?;
    state.store.get_history(voter_id).await.map(Json)
}

#[get("/<id>/polls/<pollid>")]
pub async fn get_voter_poll(
    state: &State<AppState>,
    id: &str,
    pollid: &str,
) -> Result<Json<VoterHistory>, ApiError> {
    let voter_id = parse_id(id)?;
    let poll_id = parse_id(pollid)?;
    state.store.get_poll(voter_id, poll_id).await.map(Json)
}

#[instrument(skip(state, entry))]
#[post("/<id>/polls/<pollid>", format = "json", data = "<entry>")]
pub async fn add_voter_poll(
    state: &State<AppState>,
    id: &str,
    pollid: &str,
    entry: Json<VoterHistory>,
) -> Result<Json<VoterHistory>, ApiError> {
    let voter_id = parse_id(id)?;
    // The entry carries its own poll id; the path segment is only validated.
    parse_id(pollid)?;
    let entry = state.store.add_poll(voter_id, entry.into_inner()).await?;
    info!("recorded poll {} for voter {voter_id}", entry.poll_id);
    Ok(Json(entry))
}

#[put("/<id>/polls/<pollid>", format = "json", data = "<entry>")]
pub async fn update_voter_poll(
    state: &State<AppState>,
    id: &str,
    pollid: &str,
    entry: Json<VoterHistory>,
) -> Result<Json<VoterHistory>, ApiError> {
    let voter_id = parse_id(id)?;
    let poll_id = parse_id(pollid)?;
    state
        .store
        .update_poll(voter_id, poll_id, entry.into_inner())
        .await
        .map(Json)
}

#[delete("/<id>/polls/<pollid>")]
pub async fn delete_voter_poll(
    state: &State<AppState>,
    id: &str,
    pollid: &str,
) -> Result<&'static str, ApiError> {
    let voter_id = parse_id(id)?;
    let poll_id = parse_id(pollid)?;
    state.store.delete_poll(voter_id, poll_id).await?;
    info!("deleted poll {poll_id} for voter {voter_id}");
    Ok("Voter history deleted successfully")
}

#[get("/health")]
pub async fn health() -> Json<HealthReport> {
    // The report is static; the endpoint only signals liveness.
    Json(HealthReport {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime: 100,
        voters_processed: 1000,
        errors_encountered: 10,
    })
}
