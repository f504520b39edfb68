use crate::core::frame_buffer::FrameBuffer;
use crate::error::{RasterError, Result};
use crate::geometry::vertex::{ClipVertex, Color};
use log::warn;
use std::path::PathBuf;
use std::str::FromStr;

/// `position` 指令每个顶点的分量数 (x, y, z, w)
pub const POSITION_DIMS: usize = 4;
/// `color` 指令每个颜色的分量数 (r, g, b)
pub const COLOR_DIMS: usize = 3;

/// 场景文件中的一条指令
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `png W H filename`：分配帧缓冲区并绑定导出路径
    Png {
        width: u32,
        height: u32,
        filename: PathBuf,
    },
    /// `position 4 x y z w ...`：替换位置缓冲区
    Position { vertices: Vec<ClipVertex> },
    /// `color 3 r g b ...`：替换颜色缓冲区
    Color { colors: Vec<Color> },
    /// `drawArraysTriangles first count`
    DrawArraysTriangles { first: usize, count: usize },
    /// `sRGB`：之后的量化使用 sRGB 编码
    Srgb,
}

impl Directive {
    /// 指令关键字，用于日志和错误信息
    pub fn keyword(&self) -> &'static str {
        match self {
            Directive::Png { .. } => "png",
            Directive::Position { .. } => "position",
            Directive::Color { .. } => "color",
            Directive::DrawArraysTriangles { .. } => "drawArraysTriangles",
            Directive::Srgb => "sRGB",
        }
    }

    /// 解析一行文本
    ///
    /// 空行和 `#` 注释返回 `Ok(None)`；未知关键字记录警告后同样跳过。
    /// `line` 是从1开始的行号，只用于错误信息。
    pub fn parse(text: &str, line: usize) -> Result<Option<Directive>> {
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        if keyword.starts_with('#') {
            return Ok(None);
        }
        let args: Vec<&str> = tokens.collect();

        let directive = match keyword {
            "png" => {
                let [width, height, filename] = expect_args::<3>(&args, keyword, line)?;
                let width: u32 = parse_number(width, "width", line)?;
                let height: u32 = parse_number(height, "height", line)?;
                if width == 0 || height == 0 {
                    return Err(RasterError::format(
                        line,
                        format!("画布尺寸必须为正: {}x{}", width, height),
                    ));
                }
                if FrameBuffer::byte_len(width, height).is_none() {
                    return Err(RasterError::format(
                        line,
                        format!("画布尺寸过大: {}x{}", width, height),
                    ));
                }
                Directive::Png {
                    width,
                    height,
                    filename: PathBuf::from(filename),
                }
            }
            "position" => {
                let values = parse_attribute_list(&args, POSITION_DIMS, keyword, line)?;
                Directive::Position {
                    vertices: values
                        .chunks_exact(POSITION_DIMS)
                        .map(ClipVertex::from_column_slice)
                        .collect(),
                }
            }
            "color" => {
                let values = parse_attribute_list(&args, COLOR_DIMS, keyword, line)?;
                Directive::Color {
                    colors: values
                        .chunks_exact(COLOR_DIMS)
                        .map(Color::from_column_slice)
                        .collect(),
                }
            }
            "drawArraysTriangles" => {
                let [first, count] = expect_args::<2>(&args, keyword, line)?;
                let first: usize = parse_number(first, "first", line)?;
                let count: usize = parse_number(count, "count", line)?;
                if count % 3 != 0 {
                    return Err(RasterError::format(
                        line,
                        format!("count 必须是3的倍数，实际为 {}", count),
                    ));
                }
                Directive::DrawArraysTriangles { first, count }
            }
            "sRGB" => {
                expect_args::<0>(&args, keyword, line)?;
                Directive::Srgb
            }
            other => {
                warn!("第 {} 行: 未知指令 `{}`，已跳过", line, other);
                return Ok(None);
            }
        };

        Ok(Some(directive))
    }
}

fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    keyword: &str,
    line: usize,
) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        RasterError::format(
            line,
            format!("`{}` 需要 {} 个参数，实际为 {}", keyword, N, args.len()),
        )
    })
}

fn parse_number<T: FromStr>(token: &str, what: &str, line: usize) -> Result<T> {
    token
        .parse()
        .map_err(|_| RasterError::format(line, format!("{} 无法解析: `{}`", what, token)))
}

/// 解析 `<dims> <float>*` 形式的属性列表，dims 必须等于 `expected_dims`
///
/// `nan`/`inf` 等非有限值视为格式错误。
fn parse_attribute_list(
    args: &[&str],
    expected_dims: usize,
    keyword: &str,
    line: usize,
) -> Result<Vec<f64>> {
    let Some((dims, values)) = args.split_first() else {
        return Err(RasterError::format(line, format!("`{}` 缺少分量数", keyword)));
    };
    let dims: usize = parse_number(dims, "dims", line)?;
    if dims != expected_dims {
        return Err(RasterError::format(
            line,
            format!("`{}` 的分量数必须为 {}，实际为 {}", keyword, expected_dims, dims),
        ));
    }
    if values.len() % dims != 0 {
        return Err(RasterError::format(
            line,
            format!("`{}` 的数值个数 {} 不是 {} 的倍数", keyword, values.len(), dims),
        ));
    }

    values
        .iter()
        .map(|token| {
            let value: f64 = parse_number(token, keyword, line)?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(RasterError::format(
                    line,
                    format!("`{}` 的数值必须为有限值: `{}`", keyword, token),
                ))
            }
        })
        .collect()
}
