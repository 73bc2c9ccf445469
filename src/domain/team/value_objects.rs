use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Unique identifier of a team document
///
/// Generated on the client side so a write protocol always knows the
/// identifier it is working with, even when a store call never returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short team code value object
///
/// # Validation Rules
/// - Exactly two characters (characters, not bytes)
///
/// # Example
///
/// ```
/// use scoreline_api::domain::team::TeamCode;
///
/// let code = TeamCode::new("AR".to_string()).unwrap();
/// assert_eq!(code.as_str(), "AR");
/// assert!(TeamCode::new("ARG".to_string()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCode(String);

impl TeamCode {
    /// Creates a new TeamCode after validating the format
    pub fn new(code: String) -> Result<Self, DomainError> {
        if Self::is_valid(&code) {
            Ok(Self(code))
        } else {
            Err(DomainError::Validation(format!(
                "team code must be exactly two characters, got {:?}",
                code
            )))
        }
    }

    fn is_valid(code: &str) -> bool {
        code.chars().count() == 2
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flag emoji value object
///
/// A valid flag is a pair of Unicode regional indicator symbols, which is
/// how country flag emoji are encoded (for example `"🇦🇷"`).
///
/// # Example
///
/// ```
/// use scoreline_api::domain::team::Flag;
///
/// let flag = Flag::new("🇦🇷".to_string()).unwrap();
/// assert_eq!(flag.as_str(), "🇦🇷");
/// assert!(Flag::new("AR".to_string()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag(String);

impl Flag {
    /// Creates a new Flag after validating the format
    pub fn new(flag: String) -> Result<Self, DomainError> {
        if Self::is_valid(&flag) {
            Ok(Self(flag))
        } else {
            Err(DomainError::Validation(format!(
                "flag must be a pair of regional indicator symbols, got {:?}",
                flag
            )))
        }
    }

    fn is_valid(flag: &str) -> bool {
        let mut chars = flag.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => {
                Self::is_regional_indicator(first) && Self::is_regional_indicator(second)
            }
            _ => false,
        }
    }

    fn is_regional_indicator(c: char) -> bool {
        ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
    }

    /// Returns the flag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_id_display_matches_inner_uuid() {
        let id = TeamId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }

    #[test]
    fn team_ids_are_unique() {
        let a = TeamId::new();
        let b = TeamId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn team_id_serializes_as_plain_string() {
        let id = TeamId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn valid_team_code() {
        let code = TeamCode::new("BR".to_string()).unwrap();
        assert_eq!(code.as_str(), "BR");
    }

    #[test]
    fn team_code_counts_characters_not_bytes() {
        // Two characters but more than two bytes
        let code = TeamCode::new("ÑQ".to_string()).unwrap();
        assert_eq!(code.as_str(), "ÑQ");
    }

    #[test]
    fn team_code_rejects_wrong_lengths() {
        assert!(TeamCode::new("".to_string()).is_err());
        assert!(TeamCode::new("A".to_string()).is_err());
        assert!(TeamCode::new("ARG".to_string()).is_err());
    }

    #[test]
    fn team_code_error_is_validation() {
        let err = TeamCode::new("ARG".to_string()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn valid_flag() {
        let flag = Flag::new("🇦🇷".to_string()).unwrap();
        assert_eq!(flag.as_str(), "🇦🇷");
    }

    #[test]
    fn flag_rejects_plain_letters() {
        assert!(Flag::new("AR".to_string()).is_err());
    }

    #[test]
    fn flag_rejects_wrong_symbol_counts() {
        assert!(Flag::new("".to_string()).is_err());
        // Single regional indicator
        assert!(Flag::new("\u{1F1E6}".to_string()).is_err());
        // Three regional indicators
        assert!(Flag::new("\u{1F1E6}\u{1F1F7}\u{1F1E7}".to_string()).is_err());
    }

    #[test]
    fn flag_rejects_non_indicator_emoji() {
        assert!(Flag::new("⚽⚽".to_string()).is_err());
    }

    #[test]
    fn flag_display_round_trips() {
        let flag = Flag::new("🇧🇷".to_string()).unwrap();
        assert_eq!(flag.to_string(), "🇧🇷");
    }
}
