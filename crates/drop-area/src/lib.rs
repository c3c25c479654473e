//! # Drop Area
//!
//! `drop-area` is the headless engine behind a drag-and-drop file
//! selection widget. It owns no pixels: a host routes gesture events
//! (enter, over, leave, drop, drag-start, drag-end, click) into a
//! [`DropArea`] and paints whatever affordance it likes from the returned
//! [`DropEffect`] hints. Accepted drops and browse selections are
//! delivered through a single files callback.

mod area;
mod options;

pub use area::{DropArea, DropEffect};
pub use options::DropAreaOptions;
