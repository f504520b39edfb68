// utils/mod.rs
// 导出日志与图像保存相关模块
pub mod logging;
pub mod save_utils;
