use crate::geometry::color::ColorEncoding;

/// 帧缓冲区的导出时机
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportPolicy {
    /// 每个帧缓冲区只在被替换或运行结束时导出一次
    #[default]
    EndOfRun,
    /// 在 `png` 和每条 `drawArraysTriangles` 之后立即导出
    EveryDirective,
}

impl ExportPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "end_of_run" => Some(ExportPolicy::EndOfRun),
            "every_directive" => Some(ExportPolicy::EveryDirective),
            _ => None,
        }
    }
}

/// 🔥 **纯数据结构** - 所有可通过TOML配置的渲染参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSettings {
    /// 图像导出时机
    pub export_policy: ExportPolicy,
    /// 初始即启用 sRGB 编码（场景中的 `sRGB` 指令也会启用）
    pub use_srgb: bool,
    /// env_logger 过滤器语法，例如 "info" 或 "scene_raster=debug"
    pub log_filter: Option<String>,
}

impl RenderSettings {
    /// 场景开始时的颜色编码
    pub fn initial_encoding(&self) -> ColorEncoding {
        if self.use_srgb {
            ColorEncoding::Srgb
        } else {
            ColorEncoding::Linear
        }
    }
}
