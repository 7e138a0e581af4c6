//! Navigation shell state.
//!
//! The shell has two transient flags: whether the mobile menu is open and
//! whether the page has scrolled past [`SCROLL_THRESHOLD_PX`]. Scroll
//! position comes from a [`Viewport`]; a [`NavShell`] listens to it for as
//! long as the shell exists and stops listening when dropped.

use tokio::sync::watch;

/// The bar switches to its compact style once the offset is strictly
/// greater than this.
pub const SCROLL_THRESHOLD_PX: u32 = 50;

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    /// Exact path match; `/products/` does not highlight `/products`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }

    /// Identifier used for the link's `data-testid`.
    #[must_use]
    pub fn test_id(&self) -> String {
        format!("nav-{}", self.label.to_lowercase())
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Products",
        path: "/products",
    },
    NavLink {
        label: "Services",
        path: "/services",
    },
    NavLink {
        label: "Clients",
        path: "/clients",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
    NavLink {
        label: "Contact",
        path: "/contact",
    },
];

/// Call-to-action at the end of the bar.
pub const REQUEST_QUOTE: NavLink = NavLink {
    label: "Request Quote",
    path: "/contact",
};

#[must_use]
pub const fn is_scrolled(offset_px: u32) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns `true` if the scrolled flag changed.
    pub fn on_scroll(&mut self, offset_px: u32) -> bool {
        let scrolled = is_scrolled(offset_px);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Source of scroll offsets.
#[derive(Debug)]
pub struct Viewport {
    offset: watch::Sender<u32>,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: watch::channel(0).0,
        }
    }

    pub fn scroll_to(&self, offset_px: u32) {
        self.offset.send_replace(offset_px);
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        *self.offset.borrow()
    }

    /// Number of shells currently listening.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.offset.receiver_count()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// A mounted navigation bar.
#[derive(Debug)]
pub struct NavShell {
    state: NavState,
    scroll: watch::Receiver<u32>,
}

impl NavShell {
    /// Start listening to `viewport`. The initial offset is applied at once.
    #[must_use]
    pub fn attach(viewport: &Viewport) -> Self {
        let mut scroll = viewport.offset.subscribe();
        let mut state = NavState::default();
        state.on_scroll(*scroll.borrow_and_update());
        Self { state, scroll }
    }

    /// Current flags, after applying any scroll that happened since the
    /// last call.
    pub fn state(&mut self) -> NavState {
        self.sync();
        self.state
    }

    /// Apply the latest offset. Returns `true` if the scrolled flag changed.
    pub fn sync(&mut self) -> bool {
        match self.scroll.has_changed() {
            Ok(true) => {
                let offset = *self.scroll.borrow_and_update();
                self.state.on_scroll(offset)
            }
            _ => false,
        }
    }

    /// Wait for the next scroll event and apply it. Returns `false` once
    /// the viewport is gone.
    pub async fn next_scroll(&mut self) -> bool {
        if self.scroll.changed().await.is_err() {
            return false;
        }
        let offset = *self.scroll.borrow_and_update();
        self.state.on_scroll(offset);
        true
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
    }

    /// Follow a link from the mobile menu. The menu closes.
    pub fn follow_link(&mut self, link: &NavLink) -> &'static str {
        self.state.close_menu();
        link.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(!is_scrolled(0));
        assert!(!is_scrolled(50));
        assert!(is_scrolled(51));
    }

    #[test]
    fn menu_toggles_and_link_closes_it() {
        let viewport = Viewport::new();
        let mut shell = NavShell::attach(&viewport);
        assert!(!shell.state().menu_open);

        shell.toggle_menu();
        assert!(shell.state().menu_open);

        let path = shell.follow_link(&NAV_LINKS[1]);
        assert_eq!(path, "/services");
        assert!(!shell.state().menu_open);
    }

    #[test]
    fn shell_follows_scroll() {
        let viewport = Viewport::new();
        viewport.scroll_to(120);
        let mut shell = NavShell::attach(&viewport);
        assert!(shell.state().scrolled);

        viewport.scroll_to(50);
        assert!(!shell.state().scrolled);
        viewport.scroll_to(51);
        assert!(shell.sync());
        assert!(!shell.sync());
    }

    #[test]
    fn dropping_shell_releases_listener() {
        let viewport = Viewport::new();
        assert_eq!(viewport.listener_count(), 0);

        let shell = NavShell::attach(&viewport);
        let other = NavShell::attach(&viewport);
        assert_eq!(viewport.listener_count(), 2);

        drop(shell);
        assert_eq!(viewport.listener_count(), 1);
        drop(other);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[tokio::test]
    async fn next_scroll_stops_when_viewport_goes_away() {
        let viewport = Viewport::new();
        let mut shell = NavShell::attach(&viewport);

        viewport.scroll_to(300);
        assert!(shell.next_scroll().await);
        assert!(shell.state().scrolled);

        drop(viewport);
        assert!(!shell.next_scroll().await);
    }

    #[test]
    fn active_link_is_exact_match() {
        let products = NAV_LINKS[0];
        assert!(products.is_active("/products"));
        assert!(!products.is_active("/"));
        assert!(!products.is_active("/products/3"));
        assert_eq!(products.test_id(), "nav-products");
    }
}
