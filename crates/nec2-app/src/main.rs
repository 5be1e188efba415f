//! nec2gen：生成示例天线的 NEC2 卡片文件

mod antennas;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use antennas::Antenna;
use nec2_file::{copy_card_file_to_console, write_cards_to_file, DeckConfig};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON 配置文件
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 输出文件（覆盖配置）
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// 要生成的天线
    #[arg(short, long, value_enum, default_value = "dipole")]
    antenna: Antenna,

    /// 写入后输出到控制台
    #[arg(short, long)]
    echo: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(FmtSubscriber::builder().with_max_level(level).finish())?;

    let mut config = match &cli.config {
        Some(path) => DeckConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => DeckConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.echo |= cli.echo;

    let (model, description) = cli.antenna.build(config.wire_radius, config.ground);
    info!("Built {:?} with {} elements", cli.antenna, model.tag());
    info!(
        "Sweep {} - {} MHz in {} steps",
        config.sweep.start_mhz,
        config.sweep.end_mhz(),
        config.sweep.steps
    );

    let card_stack = model.render(&config.sweep, config.radiation_pattern);
    let comments = format!("{}\n{}", description, config.comment.trim());
    write_cards_to_file(&config.output, &comments, &card_stack)
        .with_context(|| format!("Failed to write deck: {}", config.output.display()))?;

    if config.echo {
        copy_card_file_to_console(&config.output)
            .with_context(|| format!("Failed to read deck: {}", config.output.display()))?;
    }

    Ok(())
}
