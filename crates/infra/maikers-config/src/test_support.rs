//! Test-only helpers for mutating process-global state.

/// RAII guard for temporarily setting an environment variable.
///
/// The previous value is restored (or the variable removed) on drop.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set an environment variable until the guard is dropped.
    ///
    /// Callers must be marked `#[serial(env)]`.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: tests touching the environment are serialized with `#[serial(env)]`.
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Remove an environment variable until the guard is dropped.
    ///
    /// Callers must be marked `#[serial(env)]`.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: tests touching the environment are serialized with `#[serial(env)]`.
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            // SAFETY: see `EnvGuard::set`.
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            // SAFETY: see `EnvGuard::remove`.
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
