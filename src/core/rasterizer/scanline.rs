use super::span::draw_span;
use super::triangle_data::SortedTriangle;
use crate::core::frame_buffer::FrameBuffer;
use crate::geometry::color::ColorEncoding;
use crate::geometry::dda::{Dda, sample_count_within};
use crate::geometry::vertex::{Axis, VertexAttributes};
use log::trace;

/// 扫描线光栅化单个三角形，返回实际写入的像素数
///
/// 三角形按高度分为 top/middle/bottom，沿 y 方向做三次 DDA：
/// 长边 top→bottom，短边 top→middle 与 middle→bottom。
/// 三次遍历都从同一起点开始、每个采样前进一整行，因此两条短边的行数之和
/// 恰好等于长边行数；长边采样按位置依次与当前短边配对，而不是按 y 值匹配。
///
/// 三条边都只在画布行 `[0, height)` 内采样，裁剪后两条短边仍然恰好覆盖长边的
/// 同一组行，配对关系不变；画布外的行不会产生任何迭代。
pub fn rasterize_triangle(
    vertices: &[VertexAttributes; 3],
    frame_buffer: &mut FrameBuffer,
    encoding: ColorEncoding,
) -> usize {
    let Some(tri) = SortedTriangle::classify(vertices) else {
        trace!("跳过零高度三角形: {:?}", vertices);
        return 0;
    };

    let (top_y, middle_y, bottom_y) = (
        tri.top.position.y,
        tri.middle.position.y,
        tri.bottom.position.y,
    );
    let rows = f64::from(frame_buffer.height);
    debug_assert_eq!(
        sample_count_within(top_y, middle_y, 0.0, rows)
            + sample_count_within(middle_y, bottom_y, 0.0, rows),
        sample_count_within(top_y, bottom_y, 0.0, rows),
    );
    trace!(
        "三角形 y 范围 [{:.3}, {:.3}), 分割于 {:.3}",
        top_y, bottom_y, middle_y
    );

    let mut long_edge = Dda::clamped(tri.top, tri.bottom, Axis::Y, 0.0, rows);
    let upper = Dda::clamped(tri.top, tri.middle, Axis::Y, 0.0, rows);
    let lower = Dda::clamped(tri.middle, tri.bottom, Axis::Y, 0.0, rows);

    let mut written = 0;
    // 上半部分消耗长边的前缀，下半部分接着消耗剩余后缀
    for (short, long) in upper.zip(long_edge.by_ref()) {
        written += draw_span(short, long, frame_buffer, encoding);
    }
    for (short, long) in lower.zip(long_edge) {
        written += draw_span(short, long, frame_buffer, encoding);
    }
    written
}
