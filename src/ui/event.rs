/// What a widget did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Nop,
    /// Not handled. The window may act on it (Tab moves to the next field).
    Ignore,
}
