#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoplayState {
    Idle,        // No advance pending (paused by hover or mid-navigation)
    Autoplaying, // A periodic advance is scheduled
}
