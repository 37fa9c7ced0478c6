pub mod camera;
pub mod drag;
pub mod quotes;
pub mod teaser;

pub use camera::{Camera, CameraRevision, SharedCamera};
pub use drag::{DragState, wheel_zoom};
pub use quotes::{QuoteAction, QuoteRotation};
pub use teaser::TeaserTicket;
