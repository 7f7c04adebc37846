//! Shape renderers, one file per geometry variant.

pub mod ellipse;
pub mod line;
pub mod point;
pub mod polygon;
pub mod ray;
pub mod segment;
pub mod text;
