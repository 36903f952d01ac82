//! What the background needs from its host environment.

use crate::error::FieldError;

/// Host events the background subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    PointerMove,
    DeviceOrientation,
    Resize,
}

impl HostEvent {
    pub fn dom_name(self) -> &'static str {
        match self {
            HostEvent::PointerMove => "pointermove",
            HostEvent::DeviceOrientation => "deviceorientation",
            HostEvent::Resize => "resize",
        }
    }
}

/// Token for a pending per-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Per-frame scheduling primitive tied to display refresh.
pub trait FrameHost {
    fn request_frame(&mut self) -> Result<FrameHandle, FieldError>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Listener registration. A returned listener stays registered until dropped.
pub trait EventHost {
    type Listener;
    fn listen(&mut self, event: HostEvent) -> Result<Self::Listener, FieldError>;
}
