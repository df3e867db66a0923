use anyhow::{Context, Result};
use author_profiles::{logger, App, Config, PageOptions, SummarySource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "author-profiles", about = "根据 arXiv 论文生成作者主页")]
struct Cli {
    /// TOML 配置文件，不指定时从环境变量读取
    #[arg(long, global = true, env = "AUTHOR_PROFILES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 为一位或多位作者生成主页
    Write {
        /// 作者名
        #[arg(required = true)]
        authors: Vec<String>,
        /// 主页版本号
        #[arg(long)]
        version: u32,
        /// 最多考虑的论文数量
        #[arg(long, default_value_t = 100)]
        max_papers: usize,
        /// 只保留发表不足这么多年的论文
        #[arg(long, default_value_t = 20.0)]
        max_years: f64,
        /// 只保留作者为第一或最后作者的论文
        #[arg(long)]
        first_last_only: bool,
    },
    /// 列出已有主页的作者
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = match &cli.config {
        Some(path) => Config::from_toml_file(path)
            .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
        None => Config::from_env(),
    };

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    let app = App::initialize(config).context("初始化失败")?;

    match cli.command {
        Command::Write {
            authors,
            version,
            max_papers,
            max_years,
            first_last_only,
        } => {
            let options = PageOptions {
                max_papers,
                max_years,
                first_last_only,
                source: SummarySource::Abstract,
            };
            let stats = app.write_pages(&authors, version, &options).await;
            if stats.failed > 0 {
                anyhow::bail!("{} 位作者的主页生成失败", stats.failed);
            }
        }
        Command::List => {
            let mut authors: Vec<String> = app
                .list_authors()
                .context("无法列出作者")?
                .into_iter()
                .collect();
            authors.sort();
            for author in authors {
                println!("{}", author);
            }
        }
    }

    Ok(())
}
