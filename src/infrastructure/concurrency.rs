/// Worker pool sizing for parallel extraction.

use anyhow::{Context, Result};
use log::debug;

/// Default worker count: half the logical cores, minimum 1.
pub fn default_workers() -> usize {
    std::cmp::max(1, num_cpus::get() / 2)
}

/// Build a dedicated rayon pool with `workers` threads (`None` = default).
pub fn build_thread_pool(workers: Option<usize>) -> Result<rayon::ThreadPool> {
    let workers = workers.filter(|&n| n > 0).unwrap_or_else(default_workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to build extraction thread pool")?;

    debug!(
        "Initialized thread pool: {} workers (system has {} cores)",
        workers,
        num_cpus::get()
    );

    Ok(pool)
}
