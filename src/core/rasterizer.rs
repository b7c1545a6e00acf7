use crate::core::frame_buffer::FrameBuffer;
use nalgebra::Point2;

/// 在两点之间绘制一条指定粗细的线段
///
/// 采用等距采样方式：步数取两点欧氏距离的四舍五入值，逐步沿行、列
/// 两个方向线性插值，每个采样点处盖一个边长为2*thickness的方形画刷。
/// 所有写入都经过帧缓冲区的越界裁剪；后绘制的线段直接覆盖先绘制的
/// 像素，因此绘制顺序是最终输出的一部分。
///
/// # 参数
/// * `from` - 线段起点（行,列），允许为小数
/// * `to` - 线段终点（行,列），允许为小数
/// * `thickness` - 画刷半径，0表示单像素线
/// * `color` - RGB颜色
/// * `frame_buffer` - 目标帧缓冲区
pub fn plot_line(
    from: &Point2<f32>,
    to: &Point2<f32>,
    thickness: i32,
    color: [u8; 3],
    frame_buffer: &mut FrameBuffer,
) {
    // 行、列两个方向上的位移
    let vertical_distance = to.x - from.x;
    let horizontal_distance = to.y - from.y;

    // 两点间的欧氏距离决定采样步数
    let distance =
        (horizontal_distance * horizontal_distance + vertical_distance * vertical_distance).sqrt();
    let steps = distance.round() as i32;

    // 两点重合时没有可前进的方向，退化为单个画刷点
    if steps == 0 {
        stamp_point(
            from.x.round() as i32,
            from.y.round() as i32,
            thickness,
            color,
            frame_buffer,
        );
        return;
    }

    // 每一步沿行、列方向前进的距离
    let vertical_step = vertical_distance / steps as f32;
    let horizontal_step = horizontal_distance / steps as f32;

    for i in 0..steps {
        let current_row = (from.x + vertical_step * i as f32).round() as i32;
        let current_col = (from.y + horizontal_step * i as f32).round() as i32;
        stamp_point(current_row, current_col, thickness, color, frame_buffer);
    }
}

/// 在采样点处绘制线段的一个"点"：中心像素加上方形画刷窗口
///
/// 窗口在两个方向上各覆盖 [-thickness, thickness) 的偏移，
/// thickness为0时窗口为空，只保留中心像素。
fn stamp_point(
    center_row: i32,
    center_col: i32,
    thickness: i32,
    color: [u8; 3],
    frame_buffer: &mut FrameBuffer,
) {
    frame_buffer.set_pixel(center_row, center_col, color);

    for col_offset in -thickness..thickness {
        for row_offset in -thickness..thickness {
            frame_buffer.set_pixel(center_row + row_offset, center_col + col_offset, color);
        }
    }
}
