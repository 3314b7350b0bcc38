//! Event type and operation vocabulary.
//!
//! Event types are open-ended: anything outside the three known
//! categories is carried through as [`EventType::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a trace event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    BusTransaction,
    IrqEvent,
    DeviceEvent,
    Other(String),
}

impl EventType {
    /// Wire name as it appears in trace files
    pub fn as_str(&self) -> &str {
        match self {
            Self::BusTransaction => "BUS_TRANSACTION",
            Self::IrqEvent => "IRQ_EVENT",
            Self::DeviceEvent => "DEVICE_EVENT",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "BUS_TRANSACTION" => Self::BusTransaction,
            "IRQ_EVENT" => Self::IrqEvent,
            "DEVICE_EVENT" => Self::DeviceEvent,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.as_str().to_string()
    }
}

impl std::str::FromStr for EventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation names found in `event_data.operation`
pub mod ops {
    // Bus and device
    pub const READ: &str = "READ";
    pub const WRITE: &str = "WRITE";

    // Device only
    pub const READ_FAILED: &str = "READ_FAILED";
    pub const WRITE_FAILED: &str = "WRITE_FAILED";
    pub const RESET: &str = "RESET";
    pub const ENABLE: &str = "ENABLE";
    pub const DISABLE: &str = "DISABLE";
    pub const IRQ_TRIGGER: &str = "IRQ_TRIGGER";
    pub const IRQ_TRIGGER_FAILED: &str = "IRQ_TRIGGER_FAILED";
    pub const INIT_START: &str = "INIT_START";
    pub const INIT_COMPLETE: &str = "INIT_COMPLETE";
    pub const RESET_START: &str = "RESET_START";
    pub const RESET_COMPLETE: &str = "RESET_COMPLETE";
    pub const SHUTDOWN_START: &str = "SHUTDOWN_START";
    pub const SHUTDOWN_COMPLETE: &str = "SHUTDOWN_COMPLETE";

    /// Emitted by the demo peripheral
    pub const DEMO_EVENT: &str = "DEMO_EVENT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_parsing() {
        assert_eq!("BUS_TRANSACTION".parse::<EventType>().unwrap(), EventType::BusTransaction);
        assert_eq!("IRQ_EVENT".parse::<EventType>().unwrap(), EventType::IrqEvent);
        assert_eq!("DEVICE_EVENT".parse::<EventType>().unwrap(), EventType::DeviceEvent);
        assert_eq!(
            "DMA_EVENT".parse::<EventType>().unwrap(),
            EventType::Other("DMA_EVENT".to_string())
        );
    }

    #[test]
    fn test_event_type_is_case_sensitive() {
        assert!(!EventType::from("bus_transaction").is_known());
    }

    #[test]
    fn test_unknown_type_keeps_name() {
        let event_type = EventType::from("WATCHDOG");
        assert_eq!(event_type.as_str(), "WATCHDOG");
        assert_eq!(event_type.to_string(), "WATCHDOG");
    }
}
