use crate::core::frame_buffer::FrameBuffer;
use crate::geometry::color::{ColorEncoding, color_to_rgba8};
use crate::geometry::dda::Dda;
use crate::geometry::vertex::{Axis, VertexAttributes};

/// 绘制一条水平跨度，返回实际写入的像素数
///
/// 两个端点来自同一扫描线的左右边界采样，按 x 从左到右做 DDA，
/// 每个整数列产生一个插值颜色。越界像素静默跳过。
pub fn draw_span(
    a: VertexAttributes,
    b: VertexAttributes,
    frame_buffer: &mut FrameBuffer,
    encoding: ColorEncoding,
) -> usize {
    let (left, right) = if a.position.x > b.position.x {
        (b, a)
    } else {
        (a, b)
    };

    let row = left.position.y as i64;
    if row < 0 || row >= i64::from(frame_buffer.height) {
        return 0;
    }

    let width = f64::from(frame_buffer.width);
    let mut written = 0;
    // 只遍历画布内的列 [0, width)
    for sample in Dda::clamped(left, right, Axis::X, 0.0, width) {
        let rgba = color_to_rgba8(&sample.color, encoding);
        if frame_buffer.set_pixel(sample.position.x as i64, row, rgba) {
            written += 1;
        }
    }
    written
}
