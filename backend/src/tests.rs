#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::store::{voter_key, KEY_PREFIX};
    use crate::utils::parse_id;
    use rocket::http::Status;

    #[test]
    fn test_voter_key_format() {
        assert_eq!(voter_key(1), "voters:1");
        assert_eq!(voter_key(42), "voters:42");
        assert!(voter_key(9000).starts_with(KEY_PREFIX));
    }

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("0").unwrap(), 0);
        assert_eq!(parse_id("123").unwrap(), 123);
    }

    #[test]
    fn test_parse_id_rejects_malformed_input() {
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id("12.5"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id("1 "), Err(ApiError::InvalidId)));
        // i64 overflow
        assert!(matches!(
            parse_id("99999999999999999999"),
            Err(ApiError::InvalidId)
        ));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ApiError::VoterNotFound.status(), Status::NotFound);
        assert_eq!(ApiError::PollNotFound.status(), Status::NotFound);
        assert_eq!(ApiError::InvalidId.status(), Status::BadRequest);
        assert_eq!(ApiError::VoterExists.status(), Status::Conflict);
        assert_eq!(ApiError::PollExists.status(), Status::Conflict);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            Status::InternalServerError
        );
    }
}
