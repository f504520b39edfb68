use crate::core::scene::Scene;
use crate::error::Result;
use crate::io::directive::Directive;
use crate::io::render_settings::RenderSettings;
use crate::utils::save_utils::{ImageSink, PngSink};
use log::info;
use std::path::Path;

/// 读取场景文件并渲染，图像写入 `png` 指令指定的路径
pub fn render_scene_file<P: AsRef<Path>>(path: P, settings: &RenderSettings) -> Result<()> {
    let path = path.as_ref();
    info!("加载场景文件: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    render_scene_str(&content, settings, PngSink)?;
    Ok(())
}

/// 按顺序执行场景文本中的全部指令，返回导出目标
///
/// 任何错误都会立即终止处理，后续指令不再执行。
pub fn render_scene_str<S: ImageSink>(
    content: &str,
    settings: &RenderSettings,
    sink: S,
) -> Result<S> {
    let mut scene = Scene::new(settings.clone(), sink);

    for (index, text) in content.lines().enumerate() {
        let line = index + 1;
        if let Some(directive) = Directive::parse(text, line)? {
            scene.apply(directive, line)?;
        }
    }

    scene.finish()
}
