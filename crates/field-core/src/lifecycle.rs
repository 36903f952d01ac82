use crate::error::FieldError;
use crate::host::{EventHost, HostEvent};
use crate::input::InputSource;
use smallvec::SmallVec;

/// Listeners held for one mount: the input source's event plus resize.
///
/// Each listener unregisters itself when dropped, so releasing (or dropping
/// this set, including on an early-return path) leaves nothing behind.
pub struct Subscriptions<L> {
    listeners: SmallVec<[L; 2]>,
}

impl<L> Subscriptions<L> {
    pub fn acquire<H>(host: &mut H, source: InputSource) -> Result<Self, FieldError>
    where
        H: EventHost<Listener = L>,
    {
        let mut listeners = SmallVec::new();
        for event in [source.event(), HostEvent::Resize] {
            // a failure here drops whatever was already registered
            listeners.push(host.listen(event)?);
        }
        Ok(Self { listeners })
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener. Safe to call more than once.
    pub fn release(&mut self) {
        self.listeners.clear();
    }
}
