use crate::core::frame_buffer::FrameBuffer;
use crate::error::Result;
use image::{ColorType, ImageFormat};
use log::info;
use std::path::{Path, PathBuf};

/// 帧缓冲区导出目标
pub trait ImageSink {
    fn export(&mut self, frame_buffer: &FrameBuffer, path: &Path) -> Result<()>;
}

/// 保存RGBA图像数据到PNG文件
///
/// # 参数
/// * `path` - 输出文件路径，不论扩展名都以PNG格式写出
/// * `data` - RGBA数据（u8数组）
/// * `width` - 图像宽度
/// * `height` - 图像高度
pub fn save_image(path: &Path, data: &[u8], width: u32, height: u32) -> Result<()> {
    image::save_buffer_with_format(path, data, width, height, ColorType::Rgba8, ImageFormat::Png)?;
    info!("图像已保存到 {}", path.display());
    Ok(())
}

/// 通过 `image` crate 写出 PNG 文件
#[derive(Debug, Clone, Copy, Default)]
pub struct PngSink;

impl ImageSink for PngSink {
    fn export(&mut self, frame_buffer: &FrameBuffer, path: &Path) -> Result<()> {
        save_image(
            path,
            frame_buffer.get_color_buffer_bytes(),
            frame_buffer.width,
            frame_buffer.height,
        )
    }
}

/// 把每次导出的快照保存在内存中，不写磁盘
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub exports: Vec<(PathBuf, FrameBuffer)>,
}

impl MemorySink {
    /// 某个路径最后一次导出的图像
    pub fn latest(&self, path: impl AsRef<Path>) -> Option<&FrameBuffer> {
        let path = path.as_ref();
        self.exports
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, fb)| fb)
    }
}

impl ImageSink for MemorySink {
    fn export(&mut self, frame_buffer: &FrameBuffer, path: &Path) -> Result<()> {
        self.exports.push((path.to_path_buf(), frame_buffer.clone()));
        Ok(())
    }
}
