//! Bounded worker pool for the fetch-and-classify stage.
//!
//! ```text
//! &mut [TaskRecord]
//!   ↓ iter_mut()            (one exclusive record per unit)
//! Semaphore(concurrency)    (slot held through fetch + classify + delay)
//!   ↓
//! FuturesUnordered drain    (join: returns once every record is terminal)
//! ```

mod pool;
mod progress;

pub use pool::{process, PoolOptions, PoolStats};
pub use progress::ProgressMonitor;
