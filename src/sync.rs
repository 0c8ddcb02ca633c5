//! The single lock behind [`crate::Match`].

/// Exclusive lock that recovers from poisoning.
///
/// A panic inside one operation must not wedge the match for the caller, so
/// a poisoned lock hands out its guard anyway.
#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(|poisoned| {
            log::warn!("match lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
