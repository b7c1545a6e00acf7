use nalgebra::{Point2, Rotation2};

/// 将点绕枢轴点旋转指定角度（度）
///
/// 先平移使枢轴位于原点，应用二维旋转矩阵，再平移回去。
/// 坐标约定与帧缓冲区一致：x分量为行(row)，y分量为列(col)，
/// 行分量占据旋转公式中的第一个槽位。
pub fn rotate_point_around(point: &Point2<f32>, pivot: &Point2<f32>, degrees: f32) -> Point2<f32> {
    let rotation = Rotation2::new(degrees.to_radians());
    *pivot + rotation * (point - pivot)
}
