use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Voter not found")]
    VoterNotFound,
    #[error("Poll entry not found")]
    PollNotFound,
    #[error("Invalid id in request path")]
    InvalidId,
    #[error("Voter already exists")]
    VoterExists,
    #[error("Poll entry already recorded for this voter")]
    PollExists,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::VoterNotFound | ApiError::PollNotFound => Status::NotFound,
            ApiError::InvalidId => Status::BadRequest,
            ApiError::VoterExists | ApiError::PollExists => Status::Conflict,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        warn!("{} {} failed: {}", req.method(), req.uri(), self);

        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}
