//! Camera-driven scene rendering
//!
//! [`SceneRenderer`] owns a [`Camera`], a [`FrameClock`] and the pointer
//! state machine, and draws a depth-sorted, culled sprite list onto any
//! [`Surface`](crate::surface::Surface) once per tick.

pub mod camera;
pub mod clock;
pub mod input;
pub mod renderer;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM};
pub use clock::{FrameClock, ANIMATION_FRAME_DIVISOR};
pub use input::{PointerState, PointerTracker, Release};
pub use renderer::{FrameStats, RenderSettings, SceneRenderer};
