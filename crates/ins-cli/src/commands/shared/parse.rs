use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use ins_core::enums::{InsightStatus, SourceType};

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let status: InsightStatus = parse_enum("in_progress", "status").expect("status should parse");
        assert_eq!(status, InsightStatus::InProgress);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let source: SourceType =
            parse_enum("rules-engine", "source-type").expect("source type should parse");
        assert_eq!(source, SourceType::RulesEngine);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<InsightStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn timestamp_offset_is_normalized_to_utc() {
        let parsed = parse_timestamp("2023-10-19T02:00:00+02:00", "start").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 10, 19, 0, 0, 0).unwrap());
    }

    #[test]
    fn errors_on_bare_date() {
        let err = parse_timestamp("2023-10-19", "end").expect_err("should fail");
        assert!(err.to_string().contains("invalid end '2023-10-19'"));
    }
}
