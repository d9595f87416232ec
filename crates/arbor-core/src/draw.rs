//! Draw vocabulary shared by the scene emitter and the exporters.
//!
//! The scene emitter describes a diagram as a flat list of [`Primitive`]s
//! with absolute coordinates. Exporters turn primitives into backend nodes
//! and collect them per [`RenderLayer`] through a [`LayeredOutput`].

mod layer;
mod primitive;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Marker, Primitive, TextRole};
