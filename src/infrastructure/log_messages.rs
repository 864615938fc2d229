//! Log message constants
//!
//! Structured fields carry the variable parts; these are the fixed messages.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting Pulse Seer application";
    pub const CONFIG_LOADED: &str = "Configuration loaded";
    pub const LISTENING: &str = "Pulse Seer API listening";
    pub const STOPPED: &str = "Server stopped";
}

/// Dataset generation messages
pub mod dataset {
    pub const SEEDED: &str = "Generating reproducible mock dataset";
    pub const ENTROPY: &str = "Generating mock dataset from entropy";
}

/// Request handling messages
pub mod requests {
    pub const INCOMING: &str = "Incoming request";
    pub const COMPLETED: &str = "Request completed";
    pub const REJECTED: &str = "Request rejected";
    pub const FAILED: &str = "Request failed";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_messages_are_not_empty() {
        for message in [
            application::STARTING,
            application::CONFIG_LOADED,
            application::LISTENING,
            application::STOPPED,
            dataset::SEEDED,
            dataset::ENTROPY,
            requests::INCOMING,
            requests::COMPLETED,
            requests::REJECTED,
            requests::FAILED,
        ] {
            assert!(!message.is_empty());
        }
    }
}
