use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use hanzi_cards::cli::{self, App};
use hanzi_cards::print::PracticeCounts;
use hanzi_cards::{AppConfig, StatusFilter};

/// 生字学习助手
///
/// 跟踪每个词组的掌握程度，按状态筛选、搜索，并生成田字格练习纸。
#[derive(Parser)]
#[command(name = "hanzi-cards")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// 数据目录（默认：系统数据目录下的 hanzi-cards）
    #[arg(long, global = true, env = "HANZI_CARDS_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// 视图筛选参数
#[derive(Args)]
struct ViewArgs {
    /// 状态过滤: all, unknown, maybe, known, unknown-maybe
    #[arg(short, long, default_value = "all")]
    filter: StatusFilter,

    /// 搜索关键词（匹配汉字或拼音，不区分大小写）
    #[arg(short, long, default_value = "")]
    search: String,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出词组及掌握状态
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// 拼音模式：只显示拼音
        #[arg(short, long)]
        pinyin: bool,
    },

    /// 切换词组状态（不会 → 可能会 → 已掌握 → 不会）
    Toggle {
        /// 词组键，格式为 <课文序号>_<词组序号>，例如 0_1
        key: String,
    },

    /// 添加自定义词组
    Add {
        /// 词组，例如 朋友
        word: String,

        /// 拼音，音节以空格分隔，例如 "péng you"
        pinyin: String,
    },

    /// 显示学习进度
    Stats,

    /// 学习分析报告与建议
    Report,

    /// 重置所有学习状态与自定义词组
    Reset {
        /// 跳过确认
        #[arg(short, long)]
        yes: bool,
    },

    /// 导出学习进度到 JSON 文件
    Export {
        /// 输出文件（默认：生字学习进度_<日期>.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 从备份文件导入学习进度
    Import {
        /// 备份文件路径
        file: PathBuf,
    },

    /// 打印当前筛选结果的田字格练习纸
    Print {
        #[command(flatten)]
        view: ViewArgs,

        /// 输出文件（默认输出到终端）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 按状态随机抽取词组，生成自定义生字本
    Practice {
        /// 不会的词组数量
        #[arg(long, default_value_t = 0)]
        unknown: usize,

        /// 可能会的词组数量
        #[arg(long, default_value_t = 0)]
        maybe: usize,

        /// 已掌握的词组数量
        #[arg(long, default_value_t = 0)]
        known: usize,

        /// 输出文件（默认输出到终端）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 交互式学习
    Study,

    /// 显示使用帮助
    Help,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "✗".red(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.data_dir);
    log::debug!("data dir: {}", config.data_dir().display());

    let app = App::new(config);

    // 首次运行显示使用帮助
    if app.store.is_first_visit() {
        if !matches!(cli.command, Commands::Help) {
            cli::show_help()?;
            println!();
        }
        app.store.mark_visited();
    }

    match cli.command {
        Commands::List { view, pinyin } => cli::list(&app, view.filter, &view.search, pinyin),
        Commands::Toggle { key } => cli::toggle(&app, &key),
        Commands::Add { word, pinyin } => cli::add(&app, &word, &pinyin),
        Commands::Stats => cli::stats(&app),
        Commands::Report => cli::report(&app),
        Commands::Reset { yes } => cli::reset(&app, yes),
        Commands::Export { output } => cli::export(&app, output).map(|_| ()),
        Commands::Import { file } => cli::import(&app, &file),
        Commands::Print { view, output } => {
            cli::print_view(&app, view.filter, &view.search, output.as_deref())
        }
        Commands::Practice {
            unknown,
            maybe,
            known,
            output,
        } => cli::practice(
            &app,
            PracticeCounts::new(unknown, maybe, known),
            output.as_deref(),
        ),
        Commands::Study => cli::run_study(&app).await,
        Commands::Help => cli::show_help(),
    }
}
