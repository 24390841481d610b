//! Itlang Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Itlang crates.

use serde::{Deserialize, Serialize};

/// Configuration for the character source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Initial capacity of the pushback queue.
    ///
    /// Only a preallocation hint; the queue grows without bound.
    pub pushback_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            pushback_capacity: 8,
        }
    }
}

impl ReaderConfig {
    /// Parse a reader configuration from JSON text
    ///
    /// Missing fields fall back to [`ReaderConfig::default`].
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Pipeline phase, used for phase-specific log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Reader,
    Lexer,
}

impl Phase {
    /// All phases, in pipeline order
    pub const ALL: [Phase; 2] = [Phase::Reader, Phase::Lexer];

    /// Get the string name of the phase
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Reader => "reader",
            Phase::Lexer => "lexer",
        }
    }

    /// Get the log target name for this phase
    ///
    /// `const` so it can name a `tracing` target.
    pub const fn target(&self) -> &'static str {
        match self {
            Phase::Reader => "itlang::reader",
            Phase::Lexer => "itlang::lexer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reader_config() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.pushback_capacity, 8);
    }

    #[test]
    fn test_reader_config_from_json() {
        let cfg = ReaderConfig::from_json(r#"{ "pushback_capacity": 64 }"#).unwrap();
        assert_eq!(cfg.pushback_capacity, 64);
    }

    #[test]
    fn test_reader_config_missing_fields() {
        let cfg = ReaderConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ReaderConfig::default());
    }

    #[test]
    fn test_reader_config_rejects_bad_json() {
        assert!(ReaderConfig::from_json(r#"{ "pushback_capacity": "many" }"#).is_err());
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Reader.as_str(), "reader");
        assert_eq!(Phase::Lexer.target(), "itlang::lexer");
    }

    #[test]
    fn test_phase_target_matches_name() {
        for phase in Phase::ALL {
            assert_eq!(phase.target(), format!("itlang::{}", phase.as_str()));
        }
    }

    #[test]
    fn test_phase_serde() {
        let phase: Phase = serde_json::from_str(r#""reader""#).unwrap();
        assert_eq!(phase, Phase::Reader);
        assert_eq!(serde_json::to_string(&Phase::Lexer).unwrap(), r#""lexer""#);
    }
}
