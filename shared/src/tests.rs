#[cfg(test)]
mod tests {
    use crate::models::{VoterHistory, VoterItem};
    use time::{Duration, OffsetDateTime};

    fn sample_voter() -> VoterItem {
        let mut voter = VoterItem::new(1, "Jane Smith", "jane@example.com");
        voter.vote_history.push(VoterHistory {
            poll_id: 1,
            vote_id: 1,
            vote_date: OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
        });
        voter
    }

    #[test]
    fn test_voter_wire_names_are_camel_case() {
        let value = serde_json::to_value(sample_voter()).unwrap();
        assert!(value.get("voterId").is_some());
        assert!(value.get("voteHistory").is_some());
        assert!(value.get("voter_id").is_none());

        let entry = &value["voteHistory"][0];
        assert!(entry.get("pollId").is_some());
        assert!(entry.get("voteId").is_some());
        assert!(entry.get("voteDate").is_some());
    }

    #[test]
    fn test_vote_date_serializes_as_rfc3339() {
        let value = serde_json::to_value(sample_voter()).unwrap();
        assert_eq!(value["voteHistory"][0]["voteDate"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_voter_round_trip() {
        let voter = sample_voter();
        let encoded = serde_json::to_string(&voter).unwrap();
        let decoded: VoterItem = serde_json::from_str(&encoded).unwrap();
        assert_eq!(voter, decoded);
    }

    #[test]
    fn test_missing_history_defaults_to_empty() {
        let voter: VoterItem =
            serde_json::from_str(r#"{"voterId":7,"name":"Ada","email":"ada@example.com"}"#)
                .unwrap();
        assert_eq!(voter.voter_id, 7);
        assert!(voter.vote_history.is_empty());
    }

    #[test]
    fn test_missing_vote_date_defaults_to_now() {
        let entry: VoterHistory = serde_json::from_str(r#"{"pollId":1,"voteId":1}"#).unwrap();
        let age = OffsetDateTime::now_utc() - entry.vote_date;
        assert!(age >= Duration::ZERO);
        assert!(age < Duration::seconds(5));
    }

    #[test]
    fn test_explicit_vote_date_is_kept() {
        let entry: VoterHistory = serde_json::from_str(
            r#"{"pollId":2,"voteId":3,"voteDate":"2023-11-14T22:13:20Z"}"#,
        )
        .unwrap();
        assert_eq!(
            entry.vote_date,
            OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
        );
    }

    #[test]
    fn test_find_poll_scans_history() {
        let voter = sample_voter();
        assert!(voter.has_poll(1));
        assert!(!voter.has_poll(2));
        assert_eq!(voter.find_poll(1).unwrap().vote_id, 1);
        assert!(voter.find_poll(99).is_none());
        assert_eq!(voter.total_votes(), 1);
    }
}
