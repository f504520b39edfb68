use log::info;
use scene_raster::io::scene_loader::render_scene_file;
use scene_raster::io::simple_cli::SimpleCli;
use scene_raster::utils::logging::init_logging;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let (scene_path, settings) = match SimpleCli::process() {
        Ok(parsed) => parsed,
        Err(e) => {
            // 配置本身无法读取，只能用默认过滤器报告
            init_logging(None);
            return SimpleCli::report(Err(e));
        }
    };
    init_logging(settings.log_filter.as_deref());

    let start_time = Instant::now();
    let result = render_scene_file(&scene_path, &settings);
    if result.is_ok() {
        info!("总用时: {:?}", start_time.elapsed());
    }
    SimpleCli::report(result)
}
