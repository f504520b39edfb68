//! # 几何模块
//!
//! 顶点属性、DDA 插值、视口变换与颜色编码

pub mod color;
pub mod dda;
pub mod transform;
pub mod vertex;

pub use dda::{Dda, dda};
pub use transform::Viewport;
pub use vertex::{Axis, ClipVertex, Color, Interpolant, VertexAttributes};
