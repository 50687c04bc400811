//! WebGPU rendering module
//!
//! CPU-side tessellation into a single flat-colored triangle list, uploaded
//! and drawn once per frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene_vertices;
pub use vertex::Vertex;
