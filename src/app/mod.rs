pub mod marquee_driver;
pub mod ports;
pub mod rotation_cursor;
pub mod tick_schedule;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use marquee_driver::{MarqueeDriver, MarqueeHandle};
