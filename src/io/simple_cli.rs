use crate::io::config_loader::TomlConfigLoader;
use crate::io::render_settings::RenderSettings;
use clap::Parser;

/// 极简CLI - 渲染参数全部来自配置文件
#[derive(Parser, Debug)]
#[command(name = "trifractal")]
#[command(about = "🎨 TOML驱动的递归三角形分形渲染器")]
pub struct SimpleCli {
    /// 📁 配置文件路径（TOML格式）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// 📋 使用示例配置（临时创建并加载）
    #[arg(long)]
    pub use_example_config: bool,
}

impl SimpleCli {
    /// 处理CLI参数并返回RenderSettings
    pub fn process() -> Result<RenderSettings, String> {
        let cli = Self::parse();

        // 处理示例配置
        if cli.use_example_config {
            let temp_config_path = "temp_example_config.toml";

            TomlConfigLoader::create_example_config(temp_config_path)?;
            println!("✅ 已创建临时示例配置: {}", temp_config_path);

            // 不删除临时文件，用户可以当模板
            return TomlConfigLoader::load_from_file(temp_config_path)
                .map_err(|e| format!("加载示例配置失败: {}", e));
        }

        // 加载配置文件或使用默认设置
        let settings = if let Some(config_path) = &cli.config {
            println!("📁 加载配置文件: {}", config_path);
            TomlConfigLoader::load_from_file(config_path)
                .map_err(|e| format!("配置文件加载失败: {}", e))?
        } else {
            println!("💡 使用默认设置");
            RenderSettings::default()
        };

        Ok(settings)
    }
}
