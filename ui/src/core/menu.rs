//! Mobile menu open/closed state.

/// Visibility of the collapsible mobile panel.
///
/// Starts `Closed`. The toggle button flips it; activating any link in the
/// panel closes it again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a navigation link is activated.
    pub fn after_navigation(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn panel_class(self) -> &'static str {
        match self {
            MenuState::Closed => "navbar__mobile navbar__mobile--closed",
            MenuState::Open => "navbar__mobile navbar__mobile--open",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            MenuState::Closed => "navbar__toggle-icon",
            MenuState::Open => "navbar__toggle-icon navbar__toggle-icon--open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let opened = MenuState::default().toggled();
        assert_eq!(opened, MenuState::Open);
        assert_eq!(opened.toggled(), MenuState::Closed);
    }

    #[test]
    fn navigation_always_closes() {
        assert_eq!(MenuState::Open.after_navigation(), MenuState::Closed);
        assert_eq!(MenuState::Closed.after_navigation(), MenuState::Closed);
    }

    #[test]
    fn classes_follow_state() {
        assert!(MenuState::Open.panel_class().ends_with("navbar__mobile--open"));
        assert!(MenuState::Closed.panel_class().ends_with("navbar__mobile--closed"));
        assert!(MenuState::Open.icon_class().contains("--open"));
        assert!(!MenuState::Closed.icon_class().contains("--open"));
    }
}
