//! 打印任务
//!
//! 把显示内容切换为打印内容，调用打印，再在完成信号到达时恢复原内容。
//! 完成信号可能永远不来（例如打印对话框被取消），因此带一个回退定时器强制恢复。

use anyhow::Result;
use std::future::Future;
use std::time::Duration;

/// 默认回退时间
pub const DEFAULT_PRINT_FALLBACK: Duration = Duration::from_secs(5);

/// 可被打印任务接管的显示区域
pub trait PrintSurface {
    /// 替换显示内容，返回被替换的内容
    fn replace(&mut self, content: String) -> String;

    /// 调用平台打印
    fn print(&mut self) -> Result<()>;
}

/// 打印任务结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    /// 收到完成信号后恢复
    Completed,
    /// 回退定时器触发后恢复
    FallbackRestored,
}

#[derive(Debug, Clone, Copy)]
pub struct PrintJob {
    fallback: Duration,
}

impl PrintJob {
    pub fn new(fallback: Duration) -> Self {
        Self { fallback }
    }

    /// 执行一次打印
    ///
    /// `completed` 在打印完成时就绪。任务期间独占显示区，无论哪种方式结束都恢复原内容。
    pub async fn run<S, F>(
        &self,
        surface: &mut S,
        content: String,
        completed: F,
    ) -> Result<PrintOutcome>
    where
        S: PrintSurface + ?Sized,
        F: Future<Output = ()>,
    {
        let original = surface.replace(content);

        if let Err(e) = surface.print() {
            surface.replace(original);
            return Err(e);
        }

        let outcome = tokio::select! {
            _ = completed => PrintOutcome::Completed,
            _ = tokio::time::sleep(self.fallback) => {
                log::info!("打印完成信号未到达，回退恢复");
                PrintOutcome::FallbackRestored
            }
        };

        surface.replace(original);
        Ok(outcome)
    }
}

impl Default for PrintJob {
    fn default() -> Self {
        Self::new(DEFAULT_PRINT_FALLBACK)
    }
}
