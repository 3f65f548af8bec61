//! Policy identifiers

use serde::Serialize;

/// Supported synchronization strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// No synchronization, one thread
    Serial,
    /// Global mutual-exclusion lock
    Mutex,
    /// Global reader-writer lock
    RwLock,
}

impl PolicyKind {
    /// All policies in reporting order
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Serial, PolicyKind::Mutex, PolicyKind::RwLock];

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serial => "Serial",
            Self::Mutex => "Mutex",
            Self::RwLock => "Read-Write Lock",
        }
    }

    /// Whether runs of this policy may use more than one thread
    pub fn is_concurrent(&self) -> bool {
        !matches!(self, Self::Serial)
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_concurrent() {
        assert!(!PolicyKind::Serial.is_concurrent());
        assert!(PolicyKind::Mutex.is_concurrent());
        assert!(PolicyKind::RwLock.is_concurrent());
    }

    #[test]
    fn test_display_matches_report_names() {
        assert_eq!(PolicyKind::RwLock.to_string(), "Read-Write Lock");
        assert_eq!(serde_json::to_string(&PolicyKind::RwLock).unwrap(), "\"rwlock\"");
    }
}
