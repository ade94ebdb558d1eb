pub mod marquee_text;

pub use marquee_text::{BASE_TITLE, MarqueeText, MarqueeTextError};
