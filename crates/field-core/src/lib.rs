//! Platform-free core of the parallax particle background.
//!
//! Nothing here touches the DOM. The web front-end supplies a [`Surface`],
//! a [`FrameHost`] and an [`EventHost`]; tests supply recorders.

pub mod background;
pub mod constants;
pub mod device;
pub mod error;
pub mod host;
pub mod input;
pub mod lifecycle;
pub mod motion;
pub mod mount;
pub mod particles;
pub mod proximity;
pub mod render;
pub mod scheduler;
pub mod spring;
pub mod surface;

pub use background::*;
pub use constants::*;
pub use device::*;
pub use error::*;
pub use host::*;
pub use input::*;
pub use lifecycle::*;
pub use motion::*;
pub use mount::*;
pub use particles::*;
pub use proximity::*;
pub use render::*;
pub use scheduler::*;
pub use spring::*;
pub use surface::*;
