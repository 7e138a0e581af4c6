//! Component lifecycle and abort-aware requests.
//!
//! A [`Mount`] represents a mounted page or component. It hands out cheap
//! [`Scope`] clones to whatever issues requests on the component's behalf.
//! Once the mount is unmounted (explicitly or by being dropped), every
//! pending [`Scope::guard`] resolves to `None` immediately and the request
//! future is dropped, so a late response can never be applied to state that
//! belongs to a component that no longer exists.

use std::future::Future;

use tokio::sync::watch;

/// Owner of a component's lifetime.
#[derive(Debug)]
pub struct Mount {
    unmounted: watch::Sender<bool>,
}

impl Mount {
    #[must_use]
    pub fn new() -> Self {
        let (unmounted, _) = watch::channel(false);
        Self { unmounted }
    }

    /// A handle that observes this mount.
    #[must_use]
    pub fn scope(&self) -> Scope {
        Scope {
            unmounted: self.unmounted.subscribe(),
        }
    }

    /// Unmount now. Equivalent to dropping the mount.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmounted.send_replace(true);
    }
}

/// Observer of a [`Mount`]. Clone freely.
#[derive(Debug, Clone)]
pub struct Scope {
    unmounted: watch::Receiver<bool>,
}

impl Scope {
    /// `true` until the owning mount goes away.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !*self.unmounted.borrow()
    }

    /// Run `fut` unless the mount goes away first.
    ///
    /// Returns `None` if the mount was already gone, goes away while `fut`
    /// is pending, or went away in the same tick `fut` completed.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        if !self.is_mounted() {
            return None;
        }

        let mut unmounted = self.unmounted.clone();
        tokio::select! {
            biased;
            () = wait_unmounted(&mut unmounted) => None,
            out = fut => self.is_mounted().then_some(out),
        }
    }

    /// Resolves once the owning mount goes away.
    pub async fn unmounted(&self) {
        let mut unmounted = self.unmounted.clone();
        wait_unmounted(&mut unmounted).await;
    }
}

async fn wait_unmounted(rx: &mut watch::Receiver<bool>) {
    // A closed channel means the sender, and so the mount, is gone.
    let _ = rx.wait_for(|gone| *gone).await;
}
