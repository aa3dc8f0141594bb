//! Session identifiers handed back to the storefront.

use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `prev_{millis}`
pub fn preview_session_id(now: DateTime<Utc>) -> String {
    format!("prev_{}", now.timestamp_millis())
}

/// `sess_{millis}_{6 random base36 chars}`
pub fn upload_session_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("sess_{}_{}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_preview_session_id() {
        let now = Utc.timestamp_millis_opt(1_727_797_701_123).unwrap();
        assert_eq!(preview_session_id(now), "prev_1727797701123");
    }

    #[test]
    fn test_upload_session_id_shape() {
        let now = Utc.timestamp_millis_opt(1_727_797_701_123).unwrap();
        let id = upload_session_id(now);
        let suffix = id.strip_prefix("sess_1727797701123_").unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
