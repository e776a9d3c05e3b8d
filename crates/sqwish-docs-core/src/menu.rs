//! Open/close logic of the mobile navigation drawer.

/// Where a click inside the sidebar landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The search input.
    SearchInput,
    /// Inside the navigation list, but not on an entry.
    NavigationList,
    /// A navigation entry (section or sub-section link).
    NavigationEntry,
    /// Anywhere else in the sidebar.
    Elsewhere,
}

/// Mobile menu visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a click inside the sidebar; returns whether the menu closed.
    ///
    /// Clicks in the search input or the navigation list keep it open.
    pub fn on_sidebar_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::SearchInput | ClickTarget::NavigationList => false,
            ClickTarget::NavigationEntry | ClickTarget::Elsewhere => {
                let was_open = self.open;
                self.close();
                was_open
            }
        }
    }
}
