//! Shared thread pool for the parallel pipeline stages.
//!
//! Both pipelines fan independent tasks (experiment dates, experimental
//! conditions) across worker threads. Routing everything through a single
//! shared pool keeps the thread count bounded when pipelines are composed.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Get or initialize the shared thread pool.
///
/// One worker per logical CPU. The pool is created on first use and reused by
/// every parallel operation in the crate.
#[cfg(feature = "parallel")]
pub fn get_thread_pool() -> &'static ThreadPool {
    THREAD_POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to build shared thread pool")
    })
}

/// Execute an operation inside the shared thread pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    get_thread_pool().install(op)
}

/// Execute an operation directly when the `parallel` feature is disabled.
#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
