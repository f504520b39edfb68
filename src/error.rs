//! 场景光栅化过程中的错误类型

use std::io;
use thiserror::Error;

/// 使用 [`RasterError`] 的 Result 别名
pub type Result<T> = std::result::Result<T, RasterError>;

/// 光栅化管线中可能出现的错误
///
/// 除 `Io`、`Image`、`Config` 外，每个变体都携带出错的场景行号（从1开始）。
/// 所有变体都会终止整个场景的处理。
#[derive(Error, Debug)]
pub enum RasterError {
    /// 指令格式错误：参数数量/类型不对、数值无法解析、count 不是3的倍数等
    #[error("第 {line} 行格式错误: {message}")]
    Format { line: usize, message: String },

    /// 在 `png` 之前出现了需要帧缓冲区的指令
    #[error("第 {line} 行的 `{directive}` 出现在任何 `png` 指令之前")]
    UninitializedFramebuffer { line: usize, directive: String },

    /// 顶点的 w 分量为 0，无法进行透视除法
    #[error("第 {line} 行的顶点 {index} 退化 (w = 0)")]
    DegenerateVertex { line: usize, index: usize },

    /// 场景或配置文件读取失败
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// 图像导出失败
    #[error("图像导出失败: {0}")]
    Image(#[from] image::ImageError),

    /// 配置文件内容错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl RasterError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        RasterError::Format {
            line,
            message: message.into(),
        }
    }
}
