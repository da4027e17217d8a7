//! Host timer abstraction.
//!
//! The core runs on whatever executor the host provides (the browser event
//! loop in production, tokio's current-thread runtime in tests), so waiting is
//! delegated to a [`Sleeper`].

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Produces futures that resolve after a delay
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Sleeper whose futures resolve immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl Sleeper for Immediate {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(futures::future::ready(()))
    }
}

/// Sleeper whose futures never resolve.
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl Sleeper for Never {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(futures::future::pending())
    }
}
