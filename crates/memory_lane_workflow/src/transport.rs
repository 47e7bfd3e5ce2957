//! Simulated upload transport.

use async_stream::stream;
use memory_lane_interface::{ProgressStream, UploadBatch, UploadProgress, UploadTransport};
use std::time::Duration;
use tracing::debug;

/// Reports cumulative progress over a fixed number of ticks without moving any bytes.
///
/// An empty or zero-byte batch reports completion immediately.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    ticks: u32,
    tick_interval: Duration,
}

impl SimulatedTransport {
    /// Report progress `ticks` times, `tick_interval` apart.
    pub fn new(ticks: u32, tick_interval: Duration) -> Self {
        Self {
            ticks: ticks.max(1),
            tick_interval,
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(10, Duration::from_millis(200))
    }
}

impl UploadTransport for SimulatedTransport {
    fn upload(&self, batch: UploadBatch) -> ProgressStream {
        let total = batch.total_bytes();
        let ticks = u64::from(self.ticks);
        let interval = self.tick_interval;
        debug!(files = batch.len(), total_bytes = total, ticks, "Starting simulated upload");

        Box::pin(stream! {
            if total == 0 {
                yield Ok(UploadProgress::new(0, 0));
                return;
            }
            for tick in 1..=ticks {
                tokio::time::sleep(interval).await;
                let transferred = (u128::from(total) * u128::from(tick) / u128::from(ticks)) as u64;
                yield Ok(UploadProgress::new(transferred, total));
            }
        })
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
