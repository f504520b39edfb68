use crate::core::frame_buffer::FrameBuffer;
use crate::core::rasterizer::rasterize_triangle;
use crate::error::{RasterError, Result};
use crate::geometry::color::ColorEncoding;
use crate::geometry::transform::Viewport;
use crate::geometry::vertex::{ClipVertex, Color, VertexAttributes};
use crate::io::directive::Directive;
use crate::io::render_settings::{ExportPolicy, RenderSettings};
use crate::utils::save_utils::ImageSink;
use log::{debug, info};
use nalgebra::Point2;
use std::path::{Path, PathBuf};

/// 当前绑定的帧缓冲区及其导出路径
#[derive(Debug)]
struct RenderTarget {
    frame_buffer: FrameBuffer,
    viewport: Viewport,
    path: PathBuf,
    /// 自上次导出以来是否有未导出的内容
    dirty: bool,
}

/// 场景状态：按文件顺序应用指令
///
/// 持有位置/颜色缓冲区和当前帧缓冲区。`position` 与 `color` 整体替换对应缓冲区，
/// 第 i 个位置与第 i 个颜色描述同一个顶点。
pub struct Scene<S: ImageSink> {
    settings: RenderSettings,
    sink: S,
    encoding: ColorEncoding,
    target: Option<RenderTarget>,
    positions: Vec<ClipVertex>,
    screen_positions: Vec<Point2<f64>>,
    colors: Vec<Color>,
}

impl<S: ImageSink> Scene<S> {
    pub fn new(settings: RenderSettings, sink: S) -> Self {
        let encoding = settings.initial_encoding();
        Scene {
            settings,
            sink,
            encoding,
            target: None,
            positions: Vec::new(),
            screen_positions: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// 当前绑定的帧缓冲区
    pub fn frame_buffer(&self) -> Option<&FrameBuffer> {
        self.target.as_ref().map(|t| &t.frame_buffer)
    }

    /// 当前帧缓冲区的导出路径
    pub fn output_path(&self) -> Option<&Path> {
        self.target.as_ref().map(|t| t.path.as_path())
    }

    pub fn positions(&self) -> &[ClipVertex] {
        &self.positions
    }

    /// 位置缓冲区对应的屏幕坐标
    pub fn screen_positions(&self) -> &[Point2<f64>] {
        &self.screen_positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn encoding(&self) -> ColorEncoding {
        self.encoding
    }

    /// 应用一条指令，`line` 为其在场景文件中的行号
    pub fn apply(&mut self, directive: Directive, line: usize) -> Result<()> {
        let keyword = directive.keyword();
        match directive {
            Directive::Png {
                width,
                height,
                filename,
            } => self.bind_frame_buffer(width, height, filename),
            Directive::Position { vertices } => self.set_positions(vertices, keyword, line),
            Directive::Color { colors } => {
                self.require_target(keyword, line)?;
                self.colors = colors;
                Ok(())
            }
            Directive::DrawArraysTriangles { first, count } => {
                self.draw_arrays_triangles(first, count, keyword, line)
            }
            Directive::Srgb => {
                debug!("第 {} 行: 启用 sRGB 编码", line);
                self.encoding = ColorEncoding::Srgb;
                Ok(())
            }
        }
    }

    /// 导出尚未导出的帧缓冲区并交还导出目标
    pub fn finish(mut self) -> Result<S> {
        self.flush()?;
        Ok(self.sink)
    }

    fn require_target(&self, directive: &str, line: usize) -> Result<&RenderTarget> {
        self.target
            .as_ref()
            .ok_or_else(|| RasterError::UninitializedFramebuffer {
                line,
                directive: directive.to_string(),
            })
    }

    fn bind_frame_buffer(&mut self, width: u32, height: u32, path: PathBuf) -> Result<()> {
        // 新的 png 指令开始一张独立的图像，旧图像先导出
        self.flush()?;

        info!("分配 {}x{} 帧缓冲区 -> {}", width, height, path.display());
        self.target = Some(RenderTarget {
            frame_buffer: FrameBuffer::new(width, height),
            viewport: Viewport::new(width, height),
            path,
            dirty: true,
        });

        self.export_if_eager()
    }

    fn set_positions(
        &mut self,
        vertices: Vec<ClipVertex>,
        keyword: &str,
        line: usize,
    ) -> Result<()> {
        let viewport = self.require_target(keyword, line)?.viewport;

        // 全部变换成功后才替换缓冲区
        let screen = vertices
            .iter()
            .enumerate()
            .map(|(index, clip)| {
                viewport
                    .clip_to_screen(clip)
                    .ok_or(RasterError::DegenerateVertex { line, index })
            })
            .collect::<Result<Vec<_>>>()?;

        self.positions = vertices;
        self.screen_positions = screen;
        Ok(())
    }

    fn draw_arrays_triangles(
        &mut self,
        first: usize,
        count: usize,
        keyword: &str,
        line: usize,
    ) -> Result<()> {
        self.require_target(keyword, line)?;

        let end = first
            .checked_add(count)
            .ok_or_else(|| RasterError::format(line, "first + count 溢出"))?;
        if end > self.screen_positions.len() {
            return Err(RasterError::format(
                line,
                format!(
                    "顶点范围 [{}, {}) 超出 position 缓冲区 (长度 {})",
                    first,
                    end,
                    self.screen_positions.len()
                ),
            ));
        }
        if end > self.colors.len() {
            return Err(RasterError::format(
                line,
                format!(
                    "顶点范围 [{}, {}) 超出 color 缓冲区 (长度 {})",
                    first,
                    end,
                    self.colors.len()
                ),
            ));
        }

        // 绘制时刻的缓冲区快照
        let snapshot: Vec<VertexAttributes> = self.screen_positions[first..end]
            .iter()
            .zip(&self.colors[first..end])
            .map(|(&position, &color)| VertexAttributes::new(position, color))
            .collect();

        let encoding = self.encoding;
        let Some(target) = self.target.as_mut() else {
            return Ok(());
        };

        let mut written = 0;
        for triangle in snapshot.chunks_exact(3) {
            let vertices = [triangle[0], triangle[1], triangle[2]];
            written += rasterize_triangle(&vertices, &mut target.frame_buffer, encoding);
        }
        target.dirty = true;

        debug!(
            "第 {} 行: 绘制 {} 个三角形，写入 {} 个像素",
            line,
            count / 3,
            written
        );

        self.export_if_eager()
    }

    fn export_if_eager(&mut self) -> Result<()> {
        if self.settings.export_policy == ExportPolicy::EveryDirective {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(target) = self.target.as_mut() {
            if target.dirty {
                self.sink.export(&target.frame_buffer, &target.path)?;
                target.dirty = false;
            }
        }
        Ok(())
    }
}
