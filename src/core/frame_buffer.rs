/// 帧缓冲区实现，存储渲染结果
///
/// 单线程写入，分配后尺寸固定。像素按行优先存储为 RGBA 字节，
/// 初始值为全透明黑色 (0, 0, 0, 0)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    /// 存储RGBA颜色值 [0, 255]
    color_buffer: Vec<u8>,
}

impl FrameBuffer {
    pub const CHANNELS: usize = 4;

    /// 分配全透明的帧缓冲区
    ///
    /// 尺寸应先经过 [`FrameBuffer::byte_len`] 检查；溢出时分配直接失败，
    /// 不会回绕成更小的缓冲区。
    pub fn new(width: u32, height: u32) -> Self {
        let len = Self::byte_len(width, height).unwrap_or(usize::MAX);
        FrameBuffer {
            width,
            height,
            color_buffer: vec![0; len],
        }
    }

    /// `width x height` 画布所需的字节数，超出 `usize` 时返回 `None`
    pub fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(Self::CHANNELS)
    }

    #[inline]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        if x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y * self.width as usize + x) * Self::CHANNELS)
    }

    /// 写入一个像素，坐标越界时静默跳过并返回 `false`
    pub fn set_pixel(&mut self, x: i64, y: i64, rgba: [u8; 4]) -> bool {
        match self.index_of(x, y) {
            Some(index) => {
                self.color_buffer[index..index + Self::CHANNELS].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// 读取一个像素，越界返回 `None`
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let index = self.index_of(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.color_buffer[index..index + Self::CHANNELS]);
        Some(rgba)
    }

    /// 获取颜色缓冲区的字节数据
    pub fn get_color_buffer_bytes(&self) -> &[u8] {
        &self.color_buffer
    }

    /// 已写入（alpha 非零）的像素数
    pub fn covered_pixels(&self) -> usize {
        self.color_buffer
            .chunks_exact(Self::CHANNELS)
            .filter(|px| px[3] != 0)
            .count()
    }
}
