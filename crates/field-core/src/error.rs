use crate::host::HostEvent;

/// Failures surfaced by a host while wiring the background.
///
/// None of these are fatal to the page: callers log them and fall back to
/// rendering nothing.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("host rejected {0:?} listener")]
    ListenerRejected(HostEvent),
    #[error("host could not schedule a frame")]
    FrameUnavailable,
}
