use crate::core::fractal::{FractalParams, draw_triangle};
use crate::core::frame_buffer::FrameBuffer;
use crate::io::render_settings::{RenderSettings, parse_point2, parse_rgb};
use log::info;

/// 渲染器 - 管理帧缓冲区并执行分形绘制
///
/// 帧缓冲区在渲染器创建时分配一次，之后被所有分形实例共享；
/// 绘制是单线程顺序执行的，实例顺序决定重叠处的覆盖结果。
pub struct Renderer {
    pub frame_buffer: FrameBuffer,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Renderer {
            frame_buffer: FrameBuffer::new(width, height),
        }
    }

    /// 将配置中的所有分形实例依次绘制到帧缓冲区
    pub fn render(&mut self, settings: &RenderSettings) -> Result<(), String> {
        for (i, fractal) in settings.fractals.iter().enumerate() {
            let center = parse_point2(&fractal.center)
                .map_err(|e| format!("第{}个分形的center解析失败: {}", i + 1, e))?;
            let color = parse_rgb(&fractal.color)
                .map_err(|e| format!("第{}个分形的color解析失败: {}", i + 1, e))?;

            let fractal_params = FractalParams {
                thickness: fractal.thickness,
                color,
                shrink_factor: fractal.shrink_factor,
                max_depth: fractal.max_depth,
            };

            info!(
                "绘制分形 #{}: 中心 ({}), 边长 {}, 旋转 {}°, 最大深度 {}",
                i + 1,
                fractal.center,
                fractal.side_length,
                fractal.rotation,
                fractal.max_depth
            );

            draw_triangle(
                center,
                fractal.side_length,
                fractal.rotation,
                &fractal_params,
                0,
                &mut self.frame_buffer,
            );
        }

        Ok(())
    }
}
