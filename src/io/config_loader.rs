use crate::error::{RasterError, Result};
use crate::io::render_settings::{ExportPolicy, RenderSettings};
use log::warn;
use std::path::Path;
use toml::Value;

/// TOML配置管理器
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    /// 从TOML文件加载完整配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RenderSettings> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::load_from_content(&content)
    }

    /// 从TOML内容字符串加载配置
    pub fn load_from_content(content: &str) -> Result<RenderSettings> {
        let toml_value: Value = toml::from_str(content)
            .map_err(|e| RasterError::Config(format!("解析TOML失败: {}", e)))?;

        Self::parse_toml_to_settings(toml_value)
    }

    // ===== TOML -> RenderSettings 转换 =====

    fn parse_toml_to_settings(toml: Value) -> Result<RenderSettings> {
        let mut settings = RenderSettings::default();

        let Some(root) = toml.as_table() else {
            return Ok(settings);
        };

        for (section, value) in root {
            let table = value
                .as_table()
                .ok_or_else(|| RasterError::Config(format!("[{}] 必须是表", section)))?;
            match section.as_str() {
                "output" => Self::parse_output_section(&mut settings, table)?,
                "color" => Self::parse_color_section(&mut settings, table)?,
                "logging" => Self::parse_logging_section(&mut settings, table)?,
                other => warn!("忽略未知配置段 [{}]", other),
            }
        }

        Ok(settings)
    }

    // ===== 各个section的解析方法 =====

    fn parse_output_section(settings: &mut RenderSettings, output: &toml::Table) -> Result<()> {
        for (key, value) in output {
            match key.as_str() {
                "export" => {
                    let name = expect_str(value, "output.export")?;
                    settings.export_policy = ExportPolicy::from_name(name).ok_or_else(|| {
                        RasterError::Config(format!(
                            "output.export 只能是 \"end_of_run\" 或 \"every_directive\"，实际为 \"{}\"",
                            name
                        ))
                    })?;
                }
                other => warn!("忽略未知配置项 output.{}", other),
            }
        }
        Ok(())
    }

    fn parse_color_section(settings: &mut RenderSettings, color: &toml::Table) -> Result<()> {
        for (key, value) in color {
            match key.as_str() {
                "srgb" => {
                    settings.use_srgb = value
                        .as_bool()
                        .ok_or_else(|| RasterError::Config("color.srgb 必须是布尔值".to_string()))?;
                }
                other => warn!("忽略未知配置项 color.{}", other),
            }
        }
        Ok(())
    }

    fn parse_logging_section(settings: &mut RenderSettings, logging: &toml::Table) -> Result<()> {
        for (key, value) in logging {
            match key.as_str() {
                "filter" => settings.log_filter = Some(expect_str(value, "logging.filter")?.to_string()),
                other => warn!("忽略未知配置项 logging.{}", other),
            }
        }
        Ok(())
    }
}

fn expect_str<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| RasterError::Config(format!("{} 必须是字符串", key)))
}
