use log::warn;
use nalgebra::Point2;

/// 单个分形实例的根三角形参数
///
/// 向量类字段使用字符串格式（"行,列" / "r,g,b"），便于TOML序列化
#[derive(Debug, Clone, PartialEq)]
pub struct FractalInstance {
    /// 根三角形中心在像素坐标系中的位置，格式为"行,列"
    pub center: String,
    /// 根三角形的边长（像素）
    pub side_length: f32,
    /// 根三角形绕中心的初始旋转角度（度）
    pub rotation: f32,
    /// 边的粗细（画刷半径，0为单像素线）
    pub thickness: i32,
    /// 边的颜色，格式为"r,g,b"，每个分量为0-255的整数
    pub color: String,
    /// 每次递归时子三角形边长的收缩系数
    pub shrink_factor: f32,
    /// 最大递归深度
    pub max_depth: u32,
}

impl Default for FractalInstance {
    fn default() -> Self {
        Self {
            center: "512,512".to_string(),
            side_length: 400.0,
            rotation: 0.0,
            thickness: 0,
            color: "255,200,0".to_string(),
            shrink_factor: 0.5,
            max_depth: 7,
        }
    }
}

/// 纯数据结构 - 所有可通过TOML配置的渲染参数
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    // ===== 文件路径设置 =====
    /// 输出文件的基础名称
    pub output: String,
    /// 输出图像的目录
    pub output_dir: String,

    // ===== 渲染基础设置 =====
    /// 输出图像的宽度
    pub width: usize,
    /// 输出图像的高度
    pub height: usize,

    // ===== 分形实例 =====
    /// 要绘制到同一帧缓冲区的分形实例列表，按顺序绘制
    pub fractals: Vec<FractalInstance>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output: "fractal".to_string(),
            output_dir: "output_fractal".to_string(),
            width: 1024,
            height: 1024,
            fractals: vec![FractalInstance::default()],
        }
    }
}

impl RenderSettings {
    /// 校验配置的数值有效性
    ///
    /// 数值性的边界情况（零距离线段、垂直边）由核心算法分支处理，
    /// 这里只拦截无法开始渲染的非法输入。
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("无效的图像尺寸 {}x{}", self.width, self.height));
        }

        if self.fractals.is_empty() {
            warn!("配置中没有分形实例，输出将是纯黑图像");
        }

        for (i, fractal) in self.fractals.iter().enumerate() {
            let context = format!("第{}个分形", i + 1);

            if fractal.side_length <= 0.0 {
                return Err(format!(
                    "{}: 边长必须为正数，当前为 {}",
                    context, fractal.side_length
                ));
            }
            if fractal.thickness < 0 {
                return Err(format!(
                    "{}: 粗细不能为负数，当前为 {}",
                    context, fractal.thickness
                ));
            }
            if fractal.shrink_factor <= 0.0 {
                return Err(format!(
                    "{}: 收缩系数必须为正数，当前为 {}",
                    context, fractal.shrink_factor
                ));
            }
            if fractal.shrink_factor >= 1.0 {
                warn!(
                    "{}: 收缩系数 {} 不小于1，子三角形不会随深度缩小",
                    context, fractal.shrink_factor
                );
            }

            parse_point2(&fractal.center)
                .map_err(|e| format!("{}: center解析失败: {}", context, e))?;
            parse_rgb(&fractal.color).map_err(|e| format!("{}: color解析失败: {}", context, e))?;
        }

        Ok(())
    }
}

// 辅助函数用于解析逗号分隔的数值

/// 解析"行,列"格式的像素坐标点
pub fn parse_point2(s: &str) -> Result<Point2<f32>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err("需要2个逗号分隔的值".to_string());
    }
    let row = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("无效数字 '{}': {}", parts[0], e))?;
    let col = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("无效数字 '{}': {}", parts[1], e))?;
    Ok(Point2::new(row, col))
}

/// 解析"r,g,b"格式的颜色，每个分量为0-255的整数
pub fn parse_rgb(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err("需要3个逗号分隔的值".to_string());
    }
    let mut channels = [0u8; 3];
    for (channel, part) in channels.iter_mut().zip(parts.iter()) {
        *channel = part
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("无效颜色分量 '{}': {}", part, e))?;
    }
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point2_accepts_row_col_pair() {
        let point = parse_point2("3000, 7000").unwrap();
        assert_eq!(point, Point2::new(3000.0, 7000.0));
    }

    #[test]
    fn parse_point2_rejects_wrong_arity() {
        assert!(parse_point2("1,2,3").is_err());
        assert!(parse_point2("1").is_err());
        assert!(parse_point2("a,b").is_err());
    }

    #[test]
    fn parse_rgb_accepts_byte_triple() {
        assert_eq!(parse_rgb("165, 242, 243").unwrap(), [165, 242, 243]);
    }

    #[test]
    fn parse_rgb_rejects_out_of_range_components() {
        assert!(parse_rgb("256,0,0").is_err());
        assert!(parse_rgb("-1,0,0").is_err());
        assert!(parse_rgb("0,0").is_err());
    }

    #[test]
    fn default_settings_validate() {
        assert!(RenderSettings::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_dimensions_and_parameters() {
        let mut settings = RenderSettings {
            width: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        settings.width = 1024;
        settings.fractals[0].side_length = -5.0;
        assert!(settings.validate().is_err());

        settings.fractals[0].side_length = 400.0;
        settings.fractals[0].thickness = -1;
        assert!(settings.validate().is_err());

        settings.fractals[0].thickness = 0;
        settings.fractals[0].shrink_factor = 0.0;
        assert!(settings.validate().is_err());
    }
}
