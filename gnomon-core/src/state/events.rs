//! Events that trigger lifecycle transitions

/// Events that can trigger lifecycle transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Loading finished; widgets and resources are live
    LoadComplete,
    /// The face is going away; release everything acquired on load
    Teardown,
}
