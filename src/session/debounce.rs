//! 防抖
//!
//! 静默窗口内的连续调用合并为一次：新的调用会取消尚未触发的上一次。

use super::schedule::ScheduledTask;
use std::time::Duration;

/// 默认静默窗口
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// 安排一次执行，取代尚未触发的上一次
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // 旧任务在替换时被丢弃并取消
        self.pending = Some(ScheduledTask::after(self.delay, action));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce() + Send>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let make = move |n: u32| {
            let sink = sink.clone();
            Box::new(move || sink.lock().unwrap().push(n)) as Box<dyn FnOnce() + Send>
        };
        (calls, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_into_last_call() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::default();

        for n in 0..5 {
            debouncer.call(make(n));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(calls.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(*calls.lock().unwrap(), vec![4]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::default();

        debouncer.call(make(1));
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.call(make(2));
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_call() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::default();

        debouncer.call(make(1));
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(calls.lock().unwrap().is_empty());
    }
}
