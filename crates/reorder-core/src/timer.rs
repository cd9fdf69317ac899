//! Timers
//!
//! Sleep abstraction so the same timeout and debounce logic runs in the
//! browser (gloo-timers) and in native tests (tokio).

use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{select, Either, LocalBoxFuture};

/// Source of sleep futures
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer backed by `setTimeout`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

#[cfg(target_arch = "wasm32")]
impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(millis))
    }
}

/// Native timer, needs a running tokio runtime
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Timer for the current target
pub fn default_timer() -> Rc<dyn Timer> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(GlooTimer)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(TokioTimer)
    }
}

/// Run `fut` to completion unless `duration` passes first (`None`)
pub async fn with_timeout<F: Future>(timer: &dyn Timer, duration: Duration, fut: F) -> Option<F::Output> {
    let fut = pin!(fut);
    match select(fut, timer.sleep(duration)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
