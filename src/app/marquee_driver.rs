//! Drives the marquee: one title write per tick until deactivated.
//!
//! Ticks run on a single spawned task. The sink lives behind a mutex shared
//! with the handle; a tick writes and `deactivate` cancels while holding it,
//! so no write can land after `deactivate` returns.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, trace, warn};

use tabmarquee_domain::MarqueeText;

use crate::ports::TitleSink;
use crate::rotation_cursor::RotationCursor;
use crate::tick_schedule::tick_timer;

type SharedSink = Arc<Mutex<Box<dyn TitleSink>>>;

#[derive(Debug, Clone)]
pub struct MarqueeDriver {
    text: MarqueeText,
}

impl MarqueeDriver {
    pub fn new(text: MarqueeText) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &MarqueeText {
        &self.text
    }

    /// Writes the unrotated text immediately, then schedules a tick every
    /// [`TICK_INTERVAL`](crate::tick_schedule::TICK_INTERVAL).
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&self, sink: impl TitleSink + 'static) -> MarqueeHandle {
        let sink: Box<dyn TitleSink> = Box::new(sink);
        let sink: SharedSink = Arc::new(Mutex::new(sink));
        let token = CancellationToken::new();
        let mut cursor = RotationCursor::new(&self.text);
        let activated_at = Instant::now();

        tick(&self.text, &mut cursor, &sink, &token);

        let task = tokio::spawn(run_ticks(
            self.text.clone(),
            cursor,
            Arc::clone(&sink),
            token.clone(),
            activated_at,
        ));
        info!(len = self.text.len(), "marquee activated");

        MarqueeHandle {
            sink,
            token,
            task: Some(task),
        }
    }
}

impl Default for MarqueeDriver {
    fn default() -> Self {
        Self::new(MarqueeText::base())
    }
}

/// A running marquee. Dropping it deactivates the marquee.
pub struct MarqueeHandle {
    sink: SharedSink,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl MarqueeHandle {
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Cancels the pending tick. Calling it again is a no-op.
    pub fn deactivate(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        {
            let _sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
            self.token.cancel();
        }
        task.abort();
        info!("marquee deactivated");
    }
}

impl Drop for MarqueeHandle {
    fn drop(&mut self) {
        self.deactivate();
    }
}

async fn run_ticks(
    text: MarqueeText,
    mut cursor: RotationCursor,
    sink: SharedSink,
    token: CancellationToken,
    activated_at: Instant,
) {
    let mut timer = tick_timer(activated_at);

    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => break,
            _ = timer.tick() => {
                if !tick(&text, &mut cursor, &sink, &token) {
                    break;
                }
            }
        }
    }
}

/// Writes the current rotation and advances the cursor.
///
/// Returns `false` without writing once the marquee has been cancelled.
fn tick(
    text: &MarqueeText,
    cursor: &mut RotationCursor,
    sink: &SharedSink,
    token: &CancellationToken,
) -> bool {
    let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
    if token.is_cancelled() {
        return false;
    }

    let index = cursor.index();
    let title = text.rotate(index);
    trace!(index, "marquee tick");
    if let Err(e) = sink.set_title(&title) {
        warn!(index, error = %e, "failed to write marquee title");
    }
    cursor.advance();
    true
}
