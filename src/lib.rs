//! # scene-raster
//!
//! 读取逐行的场景描述（`png` / `position` / `color` / `drawArraysTriangles`），
//! 经透视除法和视口变换后，用同一个 DDA 例程完成三角形边遍历与水平跨度遍历，
//! 在三角形内部线性插值顶点颜色并输出 RGBA 图像。

pub mod core;
pub mod error;
pub mod geometry;
pub mod io;
pub mod utils;

pub use error::{RasterError, Result};
