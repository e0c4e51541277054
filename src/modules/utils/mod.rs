pub mod io;
pub mod logging;
pub mod time;

pub use logging::{ConsoleSink, LogLevel, LogSink, MemorySink};
