//! 可取消的延时任务
//!
//! 持有 tokio 任务句柄；调用 `cancel` 或丢弃句柄都会取消尚未执行的任务。
//! 任务一旦开始执行就会同步跑完，不会被中途打断。

use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// 延迟 `delay` 后执行 `task`，必须在 tokio 运行时内调用
    pub fn after<F>(delay: Duration, task: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// 已执行完毕或已取消
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
