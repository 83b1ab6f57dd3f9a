use std::sync::{Mutex, MutexGuard};

// One query may establish or use a session at a time, process-wide.
static SESSION_LOCK: Mutex<()> = Mutex::new(());

///
/// SessionGuard
///
/// Held for the whole of one query: connect, execute, iterate, release.
/// Not reentrant; a query must not start another query while holding it.
///

#[must_use]
pub(crate) struct SessionGuard {
    _guard: MutexGuard<'static, ()>,
}

impl SessionGuard {
    /// Block until the session lock is free. A lock poisoned by a panicking
    /// query is recovered; it guards no data.
    pub(crate) fn acquire() -> Self {
        let guard = SESSION_LOCK.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering poisoned session lock");
            poisoned.into_inner()
        });

        Self { _guard: guard }
    }
}
