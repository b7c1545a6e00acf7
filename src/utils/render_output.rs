use crate::core::renderer::Renderer;
use crate::io::render_settings::RenderSettings;
use crate::utils::image_utils::save_image;
use std::path::Path;

/// 保存渲染结果到输出目录
///
/// 输出路径为 {output_dir}/{output}.png
pub fn save_render_result(renderer: &Renderer, settings: &RenderSettings) -> Result<(), String> {
    let output_path = Path::new(&settings.output_dir)
        .join(format!("{}.png", settings.output))
        .to_str()
        .ok_or_else(|| "创建输出路径字符串失败".to_string())?
        .to_string();

    save_image(
        &output_path,
        renderer.frame_buffer.get_color_buffer_bytes(),
        settings.width as u32,
        settings.height as u32,
    )
}
