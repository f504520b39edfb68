use scene_raster::RasterError;
use scene_raster::io::render_settings::{ExportPolicy, RenderSettings};
use scene_raster::io::scene_loader::{render_scene_file, render_scene_str};
use scene_raster::utils::save_utils::MemorySink;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// 在临时目录中写入场景文件，`{dir}` 会替换为该目录
fn write_scene(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let scene = body.replace("{dir}", &dir.path().display().to_string());
    let path = dir.path().join("scene.txt");
    fs::write(&path, scene).expect("write scene");
    path
}

fn load_rgba(path: &Path) -> image::RgbaImage {
    image::open(path).expect("readable png").to_rgba8()
}

const RGB_TRIANGLE: &str = "\
png 64 64 {dir}/rgb.png
position 4 -0.6875 -0.6875 0 1  0.5625 -0.6875 0 1  -0.0625 0.5625 0 1
color 3 1 0 0  0 1 0  0 0 1
drawArraysTriangles 0 3
";

#[test]
fn renders_interpolated_triangle_to_png() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = write_scene(&dir, RGB_TRIANGLE);

    render_scene_file(&scene, &RenderSettings::default()).expect("render");

    let image = load_rgba(&dir.path().join("rgb.png"));
    assert_eq!(image.dimensions(), (64, 64));
    // 顶部顶点 (10, 10) 为纯红
    assert_eq!(image.get_pixel(10, 10).0, [255, 0, 0, 255]);
    // 顶部一行只混合红绿
    for x in 10..50 {
        assert_eq!(image.get_pixel(x, 10).0[2], 0);
    }
    // 三角形外保持透明
    assert_eq!(image.get_pixel(2, 2).0, [0, 0, 0, 0]);
    assert_eq!(image.get_pixel(30, 50).0, [0, 0, 0, 0]);

    // 内部像素的三个通道之和接近 255（颜色是三个基色的凸组合）
    let center = image.get_pixel(30, 25).0;
    let sum: u32 = center[..3].iter().map(|&c| c as u32).sum();
    assert!((252..=255).contains(&sum), "中心像素 {:?}", center);
    assert_eq!(center[3], 255);
}

#[test]
fn png_without_draws_still_produces_an_empty_image() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = write_scene(&dir, "png 5 3 {dir}/empty.png\n");

    render_scene_file(&scene, &RenderSettings::default()).expect("render");

    let image = load_rgba(&dir.path().join("empty.png"));
    assert_eq!(image.dimensions(), (5, 3));
    assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn later_png_starts_an_independent_image() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = write_scene(
        &dir,
        "png 16 16 {dir}/a.png\n\
         position 4 -1 -1 0 1  1 -1 0 1  -1 1 0 1\n\
         color 3 1 1 1 1 1 1 1 1 1\n\
         drawArraysTriangles 0 3\n\
         png 16 16 {dir}/b.png\n\
         drawArraysTriangles 0 3\n",
    );

    render_scene_file(&scene, &RenderSettings::default()).expect("render");

    let a = load_rgba(&dir.path().join("a.png"));
    let b = load_rgba(&dir.path().join("b.png"));
    assert_eq!(a.get_pixel(1, 1).0, [255, 255, 255, 255]);
    // 顶点在分配 a 时已变换，缓冲区继续沿用
    assert_eq!(b.get_pixel(1, 1).0, [255, 255, 255, 255]);
    assert_eq!(a, b);
}

#[test]
fn degenerate_triangles_are_silently_skipped() {
    let sink = render_scene_str(
        "png 32 32 out.png\n\
         position 4 -1 -1 0 1  0 0 0 1  1 1 0 1  -1 0 0 1  0 0 0 1  1 0 0 1\n\
         color 3 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1\n\
         drawArraysTriangles 0 6\n",
        &RenderSettings::default(),
        MemorySink::default(),
    )
    .expect("degeneracies are not errors");

    assert_eq!(sink.latest("out.png").expect("exported").covered_pixels(), 0);
}

#[test]
fn off_canvas_geometry_is_clipped_per_pixel() {
    let sink = render_scene_str(
        "png 8 8 out.png\n\
         position 4 -3 -3 0 1  3 -3 0 1  0 3 0 1\n\
         color 3 0 1 0 0 1 0 0 1 0\n\
         drawArraysTriangles 0 3\n",
        &RenderSettings::default(),
        MemorySink::default(),
    )
    .expect("off-canvas writes are skipped");

    let fb = sink.latest("out.png").expect("exported");
    assert_eq!(fb.covered_pixels(), 64);
    assert_eq!(fb.get_pixel(7, 7), Some([0, 255, 0, 255]));
}

#[test]
fn tiny_w_vertex_far_off_canvas_renders_only_canvas_rows() {
    // 第三个顶点的 w 极小，屏幕 y 达到 4e9 ~ 4e20
    for far_vertex in ["-1e-20 1 0 1e-20", "0 1 0 1e-20", "0 1 0 1e-9"] {
        let scene = format!(
            "png 8 8 out.png\n\
             position 4 -1 -1 0 1  1 -1 0 1  {}\n\
             color 3 1 1 1 1 1 1 1 1 1\n\
             drawArraysTriangles 0 3\n",
            far_vertex
        );
        let sink = render_scene_str(&scene, &RenderSettings::default(), MemorySink::default())
            .expect("finite vertex far outside the canvas");

        // 左边界在第 0 列附近，只有第 0 列的覆盖取决于舍入
        let fb = sink.latest("out.png").expect("exported");
        assert_eq!(fb.get_pixel(0, 0), Some([255, 255, 255, 255]));
        for y in 0..8 {
            for x in 1..8 {
                assert_eq!(
                    fb.get_pixel(x, y),
                    Some([255, 255, 255, 255]),
                    "顶点 {} 像素 ({}, {})",
                    far_vertex,
                    x,
                    y
                );
            }
        }
        assert!(fb.covered_pixels() >= 57);
    }
}

#[test]
fn oversized_canvas_is_a_format_error() {
    let err = render_scene_str(
        "png 4294967296 4294967296 out.png\n",
        &RenderSettings::default(),
        MemorySink::default(),
    )
    .expect_err("canvas does not fit");
    assert!(matches!(err, RasterError::Format { line: 1, .. }));
}

#[test]
fn zero_w_aborts_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = write_scene(
        &dir,
        "png 8 8 {dir}/out.png\n\
         position 4 0 0 0 1  1 1 0 0  0 1 0 1\n\
         color 3 1 1 1 1 1 1 1 1 1\n\
         drawArraysTriangles 0 3\n",
    );

    let err = render_scene_file(&scene, &RenderSettings::default()).expect_err("w = 0");
    assert!(matches!(err, RasterError::DegenerateVertex { line: 2, index: 1 }));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn format_errors_stop_processing() {
    let sink_err = render_scene_str(
        "png 8 8 out.png\nposition 4 0 0 0 1 1 0 0 1 0 1 0 1\ndrawArraysTriangles 0 2\n",
        &RenderSettings::default(),
        MemorySink::default(),
    )
    .expect_err("count not a multiple of 3");
    assert!(matches!(sink_err, RasterError::Format { line: 3, .. }));
}

#[test]
fn directives_before_png_are_rejected() {
    let err = render_scene_str(
        "# comment\n\ncolor 3 1 0 0\npng 8 8 out.png\n",
        &RenderSettings::default(),
        MemorySink::default(),
    )
    .expect_err("color before png");
    assert!(matches!(
        err,
        RasterError::UninitializedFramebuffer { line: 3, .. }
    ));
}

#[test]
fn missing_scene_file_is_io_error() {
    let err = render_scene_file("/nonexistent/scene.txt", &RenderSettings::default())
        .expect_err("missing file");
    assert!(matches!(err, RasterError::Io(_)));
}

#[test]
fn export_policy_controls_snapshot_count() {
    let scene = "png 8 8 out.png\n\
                 position 4 -1 -1 0 1  1 -1 0 1  -1 1 0 1\n\
                 color 3 1 0 0 0 1 0 0 0 1\n\
                 drawArraysTriangles 0 3\n\
                 drawArraysTriangles 0 3\n";

    let lazy = render_scene_str(scene, &RenderSettings::default(), MemorySink::default())
        .expect("render");
    assert_eq!(lazy.exports.len(), 1);

    let eager_settings = RenderSettings {
        export_policy: ExportPolicy::EveryDirective,
        ..Default::default()
    };
    let eager = render_scene_str(scene, &eager_settings, MemorySink::default()).expect("render");
    assert_eq!(eager.exports.len(), 3);
    assert_eq!(eager.latest("out.png"), lazy.latest("out.png"));
}
