//! # 三角形光栅化模块
//!
//! 基于 DDA 的扫描线光栅化器：边遍历产生每行的边界对，跨度遍历产生逐像素颜色

pub mod scanline;
pub mod span;
pub mod triangle_data;

// 重新导出主要类型和函数
pub use scanline::rasterize_triangle;
pub use span::draw_span;
pub use triangle_data::SortedTriangle;
