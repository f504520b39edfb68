use crate::error::Result;
use crate::io::config_loader::TomlConfigLoader;
use crate::io::render_settings::RenderSettings;
use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

/// 🔥 **极简CLI** - 只接受一个场景文件
#[derive(Parser, Debug)]
#[command(name = "scene-raster")]
#[command(about = "🎨 文本场景驱动的三角形光栅化器")]
pub struct SimpleCli {
    /// 📁 场景文件路径
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,
}

impl SimpleCli {
    /// 指向TOML配置文件的环境变量
    pub const CONFIG_ENV: &'static str = "SCENE_RASTER_CONFIG";

    /// 🔥 **处理CLI参数并返回场景路径和RenderSettings**
    pub fn process() -> Result<(PathBuf, RenderSettings)> {
        let cli = Self::parse();
        let settings = Self::load_settings()?;
        Ok((cli.scene, settings))
    }

    /// 从 `SCENE_RASTER_CONFIG` 指向的文件加载配置，未设置时使用默认设置
    pub fn load_settings() -> Result<RenderSettings> {
        match std::env::var_os(Self::CONFIG_ENV) {
            Some(path) => TomlConfigLoader::load_from_file(path),
            None => Ok(RenderSettings::default()),
        }
    }

    /// 通过日志报告运行结果并转换为进程退出码
    pub fn report(result: Result<()>) -> ExitCode {
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("渲染失败: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        SimpleCli::command().debug_assert();
    }

    #[test]
    fn takes_exactly_one_positional_scene() {
        let cli = SimpleCli::try_parse_from(["scene-raster", "scene.txt"]).expect("one arg");
        assert_eq!(cli.scene, PathBuf::from("scene.txt"));

        assert!(SimpleCli::try_parse_from(["scene-raster"]).is_err());
        assert!(SimpleCli::try_parse_from(["scene-raster", "a.txt", "b.txt"]).is_err());
        assert!(SimpleCli::try_parse_from(["scene-raster", "--headless", "a.txt"]).is_err());
    }

    #[test]
    fn report_maps_errors_to_failure_exit_code() {
        assert_eq!(SimpleCli::report(Ok(())), ExitCode::SUCCESS);
        assert_eq!(
            SimpleCli::report(Err(RasterError::format(3, "bad"))),
            ExitCode::FAILURE
        );
        assert_eq!(
            SimpleCli::report(Err(RasterError::Config("broken".into()))),
            ExitCode::FAILURE
        );
    }
}
