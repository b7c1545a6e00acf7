use crate::core::frame_buffer::FrameBuffer;
use crate::core::rasterizer::plot_line;
use crate::geometry::transform::rotate_point_around;
use nalgebra::Point2;

/// 近零梯度容差带：梯度绝对值低于该阈值的边按水平边处理
/// （浮点除法无法保证梯度精确为零）
pub const GRADIENT_EPS: f32 = 1e-4;

/// 单个分形实例在整个递归过程中保持不变的参数
#[derive(Debug, Clone)]
pub struct FractalParams {
    /// 边的粗细（画刷半径）
    pub thickness: i32,
    /// 边的RGB颜色
    pub color: [u8; 3],
    /// 每次递归时子三角形边长的收缩系数
    pub shrink_factor: f32,
    /// 最大递归深度
    pub max_depth: u32,
}

/// 绘制一个等边三角形，并在每条朝外的边上递归生成子三角形
///
/// 由中心、边长和旋转角推导三个角点，按固定顺序光栅化三条边：
/// 顶点→左下、顶点→右下、左下→右下。边的顺序既决定覆盖顺序，
/// 也决定子三角形的旋转增量（+60°、-60°、+180°）。根三角形
/// （iteration为0）在全部三条边上展开子三角形；更深的层级跳过
/// 第三条边（底边），避免向父三角形方向重新展开。
///
/// # 参数
/// * `center` - 三角形中心在像素坐标系中的位置（行,列）
/// * `side_length` - 三角形的边长
/// * `rotation_degrees` - 绕中心的旋转角度（度）
/// * `params` - 递归过程中不变的绘制参数
/// * `iteration` - 当前递归深度，根三角形为0
/// * `frame_buffer` - 所有层级共享的目标帧缓冲区
pub fn draw_triangle(
    center: Point2<f32>,
    side_length: f32,
    rotation_degrees: f32,
    params: &FractalParams,
    iteration: u32,
    frame_buffer: &mut FrameBuffer,
) {
    // 等边三角形的高 h = √3/2 * a
    let triangle_height = side_length * 3.0_f32.sqrt() / 2.0;

    let mut top_corner = Point2::new(center.x - triangle_height / 2.0, center.y);
    let mut bottom_left_corner = Point2::new(
        center.x + triangle_height / 2.0,
        center.y - side_length / 2.0,
    );
    let mut bottom_right_corner = Point2::new(
        center.x + triangle_height / 2.0,
        center.y + side_length / 2.0,
    );

    if rotation_degrees != 0.0 {
        top_corner = rotate_point_around(&top_corner, &center, rotation_degrees);
        bottom_left_corner = rotate_point_around(&bottom_left_corner, &center, rotation_degrees);
        bottom_right_corner = rotate_point_around(&bottom_right_corner, &center, rotation_degrees);
    }

    let lines = [
        (top_corner, bottom_left_corner),
        (top_corner, bottom_right_corner),
        (bottom_left_corner, bottom_right_corner),
    ];

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let (line_from, line_to) = line;
        plot_line(line_from, line_to, params.thickness, params.color, frame_buffer);

        // 根三角形在全部3条边上展开；更深层只在第1、2条边上展开
        if iteration < params.max_depth && (iteration < 1 || line_number < 3) {
            let new_side_length = side_length * params.shrink_factor;

            // 当前边的中点
            let center_of_line = Point2::new(
                (line_from.x + line_to.x) / 2.0,
                (line_from.y + line_to.y) / 2.0,
            );

            // 子三角形相对父级的旋转增量由边的序号决定
            let new_rotation = match line_number {
                1 => rotation_degrees + 60.0,
                2 => rotation_degrees - 60.0,
                _ => rotation_degrees + 180.0,
            };

            // 子三角形中心到边中点的距离
            let distance_from_center = triangle_height * (params.shrink_factor / 2.0);

            let new_center = child_center(
                &center,
                &center_of_line,
                line_from,
                line_to,
                distance_from_center,
            );

            draw_triangle(
                new_center,
                new_side_length,
                new_rotation,
                params,
                iteration + 1,
                frame_buffer,
            );
        }
    }
}

/// 计算子三角形的中心：从边的中点沿边的法线方向向外偏移
///
/// "向外"指远离父三角形自身的中心。近水平边（梯度落在容差带内）
/// 沿行轴偏移；垂直边（列方向位移为零）的梯度公式本身会除零，
/// 同样走行轴偏移分支。
fn child_center(
    parent_center: &Point2<f32>,
    center_of_line: &Point2<f32>,
    line_from: &Point2<f32>,
    line_to: &Point2<f32>,
    distance_from_center: f32,
) -> Point2<f32> {
    let vertical_distance = line_to.x - line_from.x;
    let horizontal_distance = line_to.y - line_from.y;

    let near_horizontal = horizontal_distance == 0.0
        || (vertical_distance / horizontal_distance).abs() < GRADIENT_EPS;

    if near_horizontal {
        // 沿行轴偏移，方向远离父三角形中心
        if center_of_line.x - parent_center.x > 0.0 {
            Point2::new(center_of_line.x + distance_from_center, center_of_line.y)
        } else {
            Point2::new(center_of_line.x - distance_from_center, center_of_line.y)
        }
    } else {
        let gradient = vertical_distance / horizontal_distance;

        // 边的法线斜率
        let difference_from_center = -1.0 / gradient;

        // 列轴方向上的偏移量
        let mut col_length = (distance_from_center * distance_from_center
            / (1.0 + difference_from_center * difference_from_center))
            .sqrt();

        // 边中点位于父中心左侧时，列方向取反
        if center_of_line.y < parent_center.y {
            col_length = -col_length;
        }

        let row_length = col_length * difference_from_center;

        Point2::new(
            center_of_line.x + row_length,
            center_of_line.y + col_length,
        )
    }
}
