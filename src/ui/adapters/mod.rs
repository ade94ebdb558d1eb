pub mod terminal_title;

pub use terminal_title::TerminalTitleSink;
