/// 日志工具模块
///
/// 提供批量生成作者主页时的日志输出辅助函数
use std::path::Path;
use tracing::info;

/// 记录本次运行的起始信息
///
/// # 参数
/// - `authors`: 待处理的作者数量
/// - `output_dir`: 主页输出目录
pub fn log_run_start(authors: usize, output_dir: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始生成作者主页");
    info!("👥 作者数量: {}", authors);
    info!("📁 输出目录: {}", output_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录单个作者的处理结果
///
/// # 参数
/// - `index`: 作者序号（从1开始）
/// - `total`: 作者总数
/// - `author`: 作者名
/// - `path`: 写入的文件路径
pub fn log_author_written(index: usize, total: usize, author: &str, path: &Path) {
    info!("[{}/{}] ✓ {} -> {}", index, total, author, path.display());
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}
