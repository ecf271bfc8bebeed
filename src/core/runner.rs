use crate::core::Demo;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;

pub struct DemoRunner<D: Demo> {
    demo: D,
    monitor_enabled: bool,
}

impl<D: Demo> DemoRunner<D> {
    pub fn new(demo: D) -> Self {
        Self::new_with_monitoring(demo, false)
    }

    pub fn new_with_monitoring(demo: D, monitor_enabled: bool) -> Self {
        Self {
            demo,
            monitor_enabled,
        }
    }

    pub fn demo(&self) -> &D {
        &self.demo
    }

    pub async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);

        tracing::info!("🚀 Starting {} demo", self.demo.name());
        monitor.log_stats("Start");

        let result = self.demo.run(out).await;

        match &result {
            Ok(()) => tracing::info!("✅ {} demo finished", self.demo.name()),
            Err(e) => tracing::debug!("{} demo failed: {}", self.demo.name(), e),
        }
        monitor.log_final_stats();

        result
    }
}
