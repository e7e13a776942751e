use anyhow::{Context, Result};
use grade_calculator::utils::logging;
use grade_calculator::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(&config);

    // 初始化并运行应用
    App::initialize(config).run().context("成绩计算器异常退出")?;

    Ok(())
}
