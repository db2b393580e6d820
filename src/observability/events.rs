//! Observability events for memberd
//!
//! Events are explicit and typed. Every log line names exactly one of
//! these events, and each event carries the severity it is logged at.

use std::fmt;

use super::Severity;

/// Observable events in memberd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // === Boot & Lifecycle ===
    /// Startup begins
    BootStart,
    /// Configuration resolved from the environment
    ConfigLoaded,
    /// Server bound and accepting requests
    Serving,

    // === Request processing ===
    /// Member list returned
    MembersListed,
    /// Member document inserted
    MemberCreated,
    /// Create request rejected by a validation rule
    MemberRejected,
    /// Request path matched no route
    RouteNotFound,

    // === Store ===
    /// First connection to the backing store established
    StoreConnected,
    /// A store operation failed
    StoreFault,
}

impl Event {
    /// Returns the wire name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "MEMBERD_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "MEMBERD_SERVING",

            Event::MembersListed => "MEMBERS_LISTED",
            Event::MemberCreated => "MEMBER_CREATED",
            Event::MemberRejected => "MEMBER_REJECTED",
            Event::RouteNotFound => "ROUTE_NOT_FOUND",

            Event::StoreConnected => "STORE_CONNECTED",
            Event::StoreFault => "STORE_FAULT",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::MemberRejected | Event::RouteNotFound => Severity::Warn,
            Event::StoreFault => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
