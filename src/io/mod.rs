//! # 输入输出模块
//!
//! 场景指令解析、场景文件驱动、配置加载与命令行

pub mod config_loader;
pub mod directive;
pub mod render_settings;
pub mod scene_loader;
pub mod simple_cli;
