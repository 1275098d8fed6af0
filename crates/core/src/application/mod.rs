// Application Layer - Use Cases

pub mod local_time;

// Re-exports
pub use local_time::LocalTimeService;
