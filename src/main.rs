use std::fs;
use std::time::Instant;

mod core;
mod geometry;
mod io;
mod utils;

use crate::core::renderer::Renderer;
use crate::io::simple_cli::SimpleCli;
use crate::utils::render_output::save_render_result;

fn main() -> Result<(), String> {
    env_logger::init();
    let start_time = Instant::now();

    // --- 处理CLI与配置 ---
    let settings = SimpleCli::process()?;
    settings.validate()?;

    // 确保输出目录存在
    fs::create_dir_all(&settings.output_dir)
        .map_err(|e| format!("创建输出目录 '{}' 失败: {}", settings.output_dir, e))?;

    // --- 渲染 ---
    println!(
        "开始渲染: {}x{} 缓冲区, {} 个分形实例",
        settings.width,
        settings.height,
        settings.fractals.len()
    );
    let render_start = Instant::now();
    let mut renderer = Renderer::new(settings.width, settings.height);
    renderer.render(&settings)?;
    println!("渲染完成，耗时 {:?}", render_start.elapsed());

    // --- 保存输出 ---
    println!("保存输出图像...");
    save_render_result(&renderer, &settings)?;

    println!("总执行时间: {:?}", start_time.elapsed());
    Ok(())
}
