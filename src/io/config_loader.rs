use crate::io::render_settings::{FractalInstance, RenderSettings};
use std::path::Path;
use toml::Value;

/// TOML配置管理器 - 统一处理所有配置的读写
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    /// 从TOML文件加载完整配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RenderSettings, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("读取配置文件失败: {}", e))?;

        Self::load_from_content(&content)
    }

    /// 从TOML内容字符串加载配置
    pub fn load_from_content(content: &str) -> Result<RenderSettings, String> {
        let toml_value: Value =
            toml::from_str(content).map_err(|e| format!("解析TOML失败: {}", e))?;

        Self::parse_toml_to_settings(toml_value)
    }

    /// 保存配置到TOML文件
    pub fn save_to_file<P: AsRef<Path>>(settings: &RenderSettings, path: P) -> Result<(), String> {
        let toml_content = Self::settings_to_toml(settings);
        std::fs::write(path, toml_content).map_err(|e| format!("写入配置文件失败: {}", e))
    }

    /// 生成示例配置文件 - 复刻经典的四分形展示场景
    pub fn create_example_config<P: AsRef<Path>>(path: P) -> Result<(), String> {
        Self::save_to_file(&Self::example_settings(), path)
            .map_err(|e| format!("创建示例配置失败: {}", e))
    }

    /// 示例场景：10000×10000画布上的四个分形实例
    fn example_settings() -> RenderSettings {
        RenderSettings {
            output: "fractal_showcase".to_string(),
            output_dir: "output_fractal".to_string(),
            width: 10000,
            height: 10000,
            fractals: vec![
                FractalInstance {
                    center: "3000,3000".to_string(),
                    side_length: 2000.0,
                    rotation: 0.0,
                    thickness: 0,
                    color: "255,200,0".to_string(),
                    shrink_factor: 0.5,
                    max_depth: 9,
                },
                FractalInstance {
                    center: "3000,7000".to_string(),
                    side_length: 1200.0,
                    rotation: 0.0,
                    thickness: 0,
                    color: "165,242,243".to_string(),
                    shrink_factor: 2.0 / 3.0,
                    max_depth: 9,
                },
                FractalInstance {
                    center: "7000,3000".to_string(),
                    side_length: 1000.0,
                    rotation: 0.0,
                    thickness: 0,
                    color: "124,252,0".to_string(),
                    shrink_factor: 2.28 / 3.0,
                    max_depth: 9,
                },
                FractalInstance {
                    center: "7000,7000".to_string(),
                    side_length: 800.0,
                    rotation: 0.0,
                    thickness: 0,
                    color: "203,195,227".to_string(),
                    shrink_factor: 2.5 / 3.0,
                    max_depth: 9,
                },
            ],
        }
    }

    // ===== TOML -> RenderSettings 转换 =====

    fn parse_toml_to_settings(toml: Value) -> Result<RenderSettings, String> {
        let mut settings = RenderSettings::default();

        // [files] 部分
        if let Some(files) = toml.get("files").and_then(|v| v.as_table()) {
            Self::parse_files_section(&mut settings, files);
        }

        // [render] 部分
        if let Some(render) = toml.get("render").and_then(|v| v.as_table()) {
            Self::parse_render_section(&mut settings, render);
        }

        // [[fractal]] 数组 - 多实例支持；配置中出现时整体替换默认实例
        if toml.get("fractal").is_some() {
            settings.fractals = Self::parse_fractals_array(&toml)?;
        }

        Ok(settings)
    }

    /// TOML把没有小数部分的数值写成整数，读取浮点字段时两种都接受
    fn float_value(value: &Value) -> Option<f64> {
        value
            .as_float()
            .or_else(|| value.as_integer().map(|i| i as f64))
    }

    fn parse_files_section(settings: &mut RenderSettings, files: &toml::Table) {
        if let Some(output) = files.get("output").and_then(|v| v.as_str()) {
            settings.output = output.to_string();
        }
        if let Some(output_dir) = files.get("output_dir").and_then(|v| v.as_str()) {
            settings.output_dir = output_dir.to_string();
        }
    }

    fn parse_render_section(settings: &mut RenderSettings, render: &toml::Table) {
        if let Some(width) = render.get("width").and_then(|v| v.as_integer()) {
            settings.width = width as usize;
        }
        if let Some(height) = render.get("height").and_then(|v| v.as_integer()) {
            settings.height = height as usize;
        }
    }

    /// 多实例解析 - 支持 [[fractal]] 数组语法
    fn parse_fractals_array(toml: &Value) -> Result<Vec<FractalInstance>, String> {
        let mut fractals = Vec::new();

        if let Some(fractals_array) = toml.get("fractal").and_then(|v| v.as_array()) {
            for (i, fractal_value) in fractals_array.iter().enumerate() {
                if let Some(fractal_table) = fractal_value.as_table() {
                    let fractal = Self::parse_single_fractal(fractal_table)
                        .map_err(|e| format!("第{}个分形解析失败: {}", i + 1, e))?;
                    fractals.push(fractal);
                }
            }
        }

        Ok(fractals)
    }

    fn parse_single_fractal(fractal_table: &toml::Table) -> Result<FractalInstance, String> {
        let center = fractal_table
            .get("center")
            .and_then(|v| v.as_str())
            .ok_or("分形缺少center字段")?
            .to_string();

        let side_length = fractal_table
            .get("side_length")
            .and_then(Self::float_value)
            .ok_or("分形缺少side_length字段")? as f32;

        let rotation = fractal_table
            .get("rotation")
            .and_then(Self::float_value)
            .unwrap_or(0.0) as f32;

        let thickness = fractal_table
            .get("thickness")
            .and_then(|v| v.as_integer())
            .unwrap_or(0) as i32;

        let color = fractal_table
            .get("color")
            .and_then(|v| v.as_str())
            .unwrap_or("255,200,0")
            .to_string();

        let shrink_factor = fractal_table
            .get("shrink_factor")
            .and_then(Self::float_value)
            .unwrap_or(0.5) as f32;

        let max_depth = fractal_table
            .get("max_depth")
            .and_then(|v| v.as_integer())
            .unwrap_or(7) as u32;

        Ok(FractalInstance {
            center,
            side_length,
            rotation,
            thickness,
            color,
            shrink_factor,
            max_depth,
        })
    }

    // ===== RenderSettings -> TOML 转换 =====

    fn settings_to_toml(settings: &RenderSettings) -> String {
        let mut content = String::new();

        // 文件头注释
        content.push_str("# 🎨 三角形分形渲染器配置文件\n");
        content.push_str("# 基于RenderSettings默认值生成的示例配置\n\n");

        // [files] 部分
        content.push_str("[files]\n");
        content.push_str(&format!("output = \"{}\"\n", settings.output));
        content.push_str(&format!("output_dir = \"{}\"\n", settings.output_dir));
        content.push('\n');

        // [render] 部分
        content.push_str("[render]\n");
        content.push_str(&format!("width = {}\n", settings.width));
        content.push_str(&format!("height = {}\n", settings.height));
        content.push('\n');

        // [[fractal]] 数组
        content.push_str("# 分形实例 - 每个实例是一棵独立的递归三角形树\n");
        content.push_str("# center: 根三角形中心 \"行,列\"\n");
        content.push_str("# shrink_factor: 每层递归的边长收缩系数\n");
        for fractal in &settings.fractals {
            content.push_str("[[fractal]]\n");
            content.push_str(&format!("center = \"{}\"\n", fractal.center));
            content.push_str(&format!("side_length = {}\n", fractal.side_length));
            content.push_str(&format!("rotation = {}\n", fractal.rotation));
            content.push_str(&format!("thickness = {}\n", fractal.thickness));
            content.push_str(&format!("color = \"{}\"\n", fractal.color));
            content.push_str(&format!("shrink_factor = {}\n", fractal.shrink_factor));
            content.push_str(&format!("max_depth = {}\n", fractal.max_depth));
            content.push('\n');
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_settings() {
        let settings = TomlConfigLoader::example_settings();
        let content = TomlConfigLoader::settings_to_toml(&settings);
        let reloaded = TomlConfigLoader::load_from_content(&content).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn parses_fractal_array() {
        let content = r#"
            [render]
            width = 800
            height = 600

            [[fractal]]
            center = "300,400"
            side_length = 200
            color = "255,0,0"

            [[fractal]]
            center = "300,600"
            side_length = 120.5
            rotation = 45.0
            thickness = 2
            shrink_factor = 0.6
            max_depth = 4
        "#;

        let settings = TomlConfigLoader::load_from_content(content).unwrap();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.fractals.len(), 2);

        // 第一个实例只给了必填字段，其余取默认值
        assert_eq!(settings.fractals[0].center, "300,400");
        assert_eq!(settings.fractals[0].side_length, 200.0);
        assert_eq!(settings.fractals[0].thickness, 0);
        assert_eq!(settings.fractals[0].max_depth, 7);

        assert_eq!(settings.fractals[1].side_length, 120.5);
        assert_eq!(settings.fractals[1].rotation, 45.0);
        assert_eq!(settings.fractals[1].thickness, 2);
        assert_eq!(settings.fractals[1].shrink_factor, 0.6);
        assert_eq!(settings.fractals[1].max_depth, 4);
    }

    #[test]
    fn missing_center_is_an_error() {
        let content = r#"
            [[fractal]]
            side_length = 200
        "#;
        let result = TomlConfigLoader::load_from_content(content);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("center"));
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let settings = TomlConfigLoader::load_from_content("").unwrap();
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn example_settings_reproduce_the_four_showcase_fractals() {
        let settings = TomlConfigLoader::example_settings();
        assert_eq!(settings.width, 10000);
        assert_eq!(settings.height, 10000);
        assert_eq!(settings.fractals.len(), 4);
        assert_eq!(settings.fractals[0].center, "3000,3000");
        assert_eq!(settings.fractals[0].side_length, 2000.0);
        assert!(settings.fractals.iter().all(|f| f.max_depth == 9));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(TomlConfigLoader::load_from_content("[[fractal").is_err());
    }
}
