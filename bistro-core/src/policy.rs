use serde::Deserialize;

/// Which subscribers hear about a status change
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationMode {
    /// Every subscriber, in subscription order
    #[default]
    All,
    /// Only the first subscriber
    FirstOnly,
}

/// How status changes are checked against the workflow
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may be set at any time
    #[default]
    Permissive,
    /// Only transitions in the workflow table are accepted
    Strict,
}
