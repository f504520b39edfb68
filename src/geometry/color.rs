use super::vertex::Color;

/// 颜色量化前使用的编码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorEncoding {
    /// 直接量化线性值
    #[default]
    Linear,
    /// 先用 sRGB 传递函数编码再量化
    Srgb,
}

/// 单通道线性值转 sRGB 编码值
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// 将 [0.0, 1.0] 浮点通道量化为 u8：乘以255后向零截断（不四舍五入），超出范围的值饱和
#[inline]
pub fn quantize_channel(value: f64) -> u8 {
    (value * 255.0).trunc().clamp(0.0, 255.0) as u8
}

/// 将线性RGB值转换为不透明的 RGBA 字节
///
/// # Arguments
/// * `color` - 线性空间的RGB颜色值 [0.0-1.0]
/// * `encoding` - 量化前是否应用 sRGB 编码
pub fn color_to_rgba8(color: &Color, encoding: ColorEncoding) -> [u8; 4] {
    let display = match encoding {
        ColorEncoding::Linear => *color,
        ColorEncoding::Srgb => color.map(linear_to_srgb),
    };

    [
        quantize_channel(display.x),
        quantize_channel(display.y),
        quantize_channel(display.z),
        255,
    ]
}
