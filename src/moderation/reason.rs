//! Suppression reason catalog entry.

/// A deduplicated suppression reason, keyed by a short code.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SuppressionReason {
    /// Unique reason ID.
    pub id: i64,
    /// Short code identifying the reason (unique).
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_fields() {
        let reason = SuppressionReason {
            id: 1,
            code: "spam".to_string(),
            description: "Unsolicited advertising".to_string(),
        };
        assert_eq!(reason.code, "spam");
        assert!(!reason.description.is_empty());
    }
}
