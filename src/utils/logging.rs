use log::LevelFilter;

/// 初始化全局日志
///
/// 过滤器优先级：配置文件 > `RUST_LOG` > 默认 info。
/// 重复调用时保持已有的日志器不变。
pub fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();

    match filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => {
            builder.filter_level(LevelFilter::Info);
        }
    }

    if builder.try_init().is_ok() {
        log::debug!("日志已初始化");
    }
}
