//! Scoped suppression of automatic screen sleep.
//!
//! Hosts expose their power setting through [`IdleInhibitor`]. The setting is
//! only ever switched on by creating an [`IdleGuard`] and switched back off when
//! that guard is dropped, so every path that unwinds the owner restores it.

/// A host's "prevent automatic screen sleep" toggle.
pub trait IdleInhibitor {
    fn set_idle_disabled(&mut self, disabled: bool);
}

impl<T: IdleInhibitor + ?Sized> IdleInhibitor for Box<T> {
    fn set_idle_disabled(&mut self, disabled: bool) {
        (**self).set_idle_disabled(disabled)
    }
}

/// Holds idle sleep disabled for as long as it lives.
pub struct IdleGuard<I: IdleInhibitor> {
    inhibitor: I,
}

impl<I: IdleInhibitor> IdleGuard<I> {
    pub fn acquire(mut inhibitor: I) -> Self {
        inhibitor.set_idle_disabled(true);
        log::debug!("[idle] sleep suppressed");
        Self { inhibitor }
    }

    /// Restore idle sleep now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<I: IdleInhibitor> Drop for IdleGuard<I> {
    fn drop(&mut self) {
        self.inhibitor.set_idle_disabled(false);
        log::debug!("[idle] sleep restored");
    }
}
