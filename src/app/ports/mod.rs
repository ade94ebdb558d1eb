pub mod title_sink;

pub use title_sink::{TitleSink, TitleSinkError};

#[cfg(any(test, feature = "test-support"))]
pub use title_sink::MockTitleSink;
