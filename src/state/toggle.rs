use std::rc::Rc;

use yew::Reducible;

/// Mobile navigation drawer. Independent of the navbar scroll style and of
/// the portfolio selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV_SCROLL_THRESHOLD_PX;

    #[test]
    fn test_menu_toggle_flips() {
        let menu: Rc<MenuState> = Rc::default();
        assert!(!menu.open);
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.open);
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(!menu.open);
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let open = Rc::new(MenuState { open: true });
        let closed = open.reduce(MenuAction::Close);
        assert!(!closed.open);

        let again = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, NAV_SCROLL_THRESHOLD_PX));
        assert!(!is_scrolled(NAV_SCROLL_THRESHOLD_PX, NAV_SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(NAV_SCROLL_THRESHOLD_PX + 0.5, NAV_SCROLL_THRESHOLD_PX));
        assert!(is_scrolled(2000.0, NAV_SCROLL_THRESHOLD_PX));
    }

    #[test]
    fn test_menu_and_selection_are_independent() {
        use crate::content::ProjectId;
        use crate::state::selection::{PortfolioSelection, SelectionAction};

        let id = ProjectId::all().last().unwrap();
        let selection = Rc::new(PortfolioSelection::default()).reduce(SelectionAction::Select(id));
        let menu: Rc<MenuState> = Rc::default();

        // Opening and closing the menu leaves the open project alone
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.open);
        assert_eq!(selection.selected(), Some(id));
        let menu = menu.reduce(MenuAction::Close);
        assert!(!menu.open);
        assert_eq!(selection.selected(), Some(id));

        // Dismissing the overlay leaves an open menu alone
        let menu = menu.reduce(MenuAction::Toggle);
        let selection = selection.reduce(SelectionAction::Clear);
        assert_eq!(selection.selected(), None);
        assert!(menu.open);
    }
}
