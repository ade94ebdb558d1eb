pub mod error;
pub mod logging;

pub use tabmarquee_app as app;
pub use tabmarquee_domain as domain;
pub use tabmarquee_ui as ui;
