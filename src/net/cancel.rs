//! Cancellation token for in-flight requests.
//!
//! A token is created per request and shared between the caller and the
//! request future. Cancelling it aborts the underlying `fetch` through an
//! `AbortController`; outside the browser only the flag is kept.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct CancelToken {
    inner: Rc<TokenInner>,
}

#[derive(Debug)]
struct TokenInner {
    cancelled: Cell<bool>,
    #[cfg(feature = "csr")]
    controller: Option<web_sys::AbortController>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(TokenInner {
                cancelled: Cell::new(false),
                #[cfg(feature = "csr")]
                controller: web_sys::AbortController::new().ok(),
            }),
        }
    }

    /// Cancel the request. Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(controller) = &self.inner.controller {
                controller.abort();
            }
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Abort signal to attach to the `fetch` call.
    #[cfg(feature = "csr")]
    pub(crate) fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.inner.controller.as_ref().map(web_sys::AbortController::signal)
    }
}
