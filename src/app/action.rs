use crate::logging::ProgressEvent;

/// Side effects the event loop applies after a handler pass. State
/// mutation happens in the handlers; only I/O is deferred here.
#[derive(Debug)]
pub enum Action {
    Journal(ProgressEvent),
    Quit,
}
