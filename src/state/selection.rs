use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::content::{Project, ProjectId};

/// Which portfolio project, if any, is open in the detail overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortfolioSelection {
    selected: Option<ProjectId>,
}

impl PortfolioSelection {
    /// Replaces whatever was selected before.
    pub fn select(&mut self, id: ProjectId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn project(&self) -> Option<&'static Project> {
        self.selected.map(ProjectId::project)
    }

    #[cfg(test)]
    pub fn overlay_visible(&self) -> bool {
        self.selected.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Select(ProjectId),
    Clear,
}

impl Reducible for PortfolioSelection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SelectionAction::Select(id) => {
                debug!("portfolio: selected {}", id.project().title);
                next.select(id);
            }
            SelectionAction::Clear => next.clear(),
        }

        // Same Rc back means yew skips the re-render
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Parts of the open overlay a pointer activation can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTarget {
    Backdrop,
    CloseButton,
    Body,
}

/// How an overlay element handles a click that lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayResponse {
    /// Keep the click from bubbling up to the backdrop.
    pub stop_propagation: bool,
    pub action: Option<SelectionAction>,
}

/// Clicks on the body are contained and never dismiss the overlay. The close
/// button is inside the body, so it contains its click as well.
pub fn overlay_action(target: OverlayTarget) -> OverlayResponse {
    match target {
        OverlayTarget::Backdrop => OverlayResponse {
            stop_propagation: false,
            action: Some(SelectionAction::Clear),
        },
        OverlayTarget::CloseButton => OverlayResponse {
            stop_propagation: true,
            action: Some(SelectionAction::Clear),
        },
        OverlayTarget::Body => OverlayResponse {
            stop_propagation: true,
            action: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<PortfolioSelection>, action: SelectionAction) -> Rc<PortfolioSelection> {
        state.reduce(action)
    }

    fn brand_identity() -> ProjectId {
        ProjectId::by_title("Brand Identity").unwrap()
    }

    fn opened(id: ProjectId) -> Rc<PortfolioSelection> {
        dispatch(Rc::default(), SelectionAction::Select(id))
    }

    /// Delivers a click to each element on `path`, innermost first, the way the
    /// DOM bubbles it, until one of them stops propagation.
    fn click(mut state: Rc<PortfolioSelection>, path: &[OverlayTarget]) -> Rc<PortfolioSelection> {
        for target in path {
            let response = overlay_action(*target);
            if let Some(action) = response.action {
                state = dispatch(state, action);
            }
            if response.stop_propagation {
                break;
            }
        }
        state
    }

    const BODY_CLICK: [OverlayTarget; 2] = [OverlayTarget::Body, OverlayTarget::Backdrop];
    const CLOSE_CLICK: [OverlayTarget; 3] = [
        OverlayTarget::CloseButton,
        OverlayTarget::Body,
        OverlayTarget::Backdrop,
    ];
    const BACKDROP_CLICK: [OverlayTarget; 1] = [OverlayTarget::Backdrop];

    #[test]
    fn test_initial_state_has_no_overlay() {
        let state = PortfolioSelection::default();
        assert_eq!(state.selected(), None);
        assert!(!state.overlay_visible());
        assert!(state.project().is_none());
    }

    #[test]
    fn test_select_then_read_yields_project() {
        for id in ProjectId::all() {
            let mut state = PortfolioSelection::default();
            state.select(id);
            assert_eq!(state.selected(), Some(id));
            assert_eq!(state.project(), Some(id.project()));
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = PortfolioSelection::default();
        state.clear();
        assert_eq!(state, PortfolioSelection::default());

        for id in ProjectId::all() {
            state.select(id);
            state.clear();
            assert_eq!(state.selected(), None);
            state.clear();
            assert_eq!(state.selected(), None);
        }
    }

    #[test]
    fn test_second_select_replaces_first() {
        for first in ProjectId::all() {
            for second in ProjectId::all().filter(|id| *id != first) {
                let state = opened(first);
                let state = dispatch(state, SelectionAction::Select(second));
                assert_eq!(state.selected(), Some(second));
            }
        }
    }

    #[test]
    fn test_overlay_visible_iff_selected() {
        let mut reachable = vec![PortfolioSelection::default()];
        for id in ProjectId::all() {
            let mut state = PortfolioSelection::default();
            state.select(id);
            reachable.push(state);
        }
        for state in reachable {
            assert_eq!(state.overlay_visible(), state.selected().is_some());
        }
    }

    #[test]
    fn test_body_click_stops_propagation_backdrop_does_not() {
        assert!(overlay_action(OverlayTarget::Body).stop_propagation);
        assert_eq!(overlay_action(OverlayTarget::Body).action, None);

        assert!(!overlay_action(OverlayTarget::Backdrop).stop_propagation);
        assert_eq!(
            overlay_action(OverlayTarget::Backdrop).action,
            Some(SelectionAction::Clear)
        );
    }

    #[test]
    fn test_click_inside_overlay_keeps_selection() {
        for id in ProjectId::all() {
            let state = click(opened(id), &BODY_CLICK);
            assert_eq!(state.selected(), Some(id));
            assert!(state.overlay_visible());
        }
    }

    #[test]
    fn test_backdrop_and_close_button_dismiss_identically() {
        let open = opened(brand_identity());

        let via_backdrop = click(open.clone(), &BACKDROP_CLICK);
        let via_close = click(open, &CLOSE_CLICK);

        assert_eq!(*via_backdrop, *via_close);
        assert_eq!(via_backdrop.selected(), None);
    }

    #[test]
    fn test_clear_on_empty_returns_same_rc() {
        let empty = Rc::new(PortfolioSelection::default());
        let after = dispatch(empty.clone(), SelectionAction::Clear);
        assert!(Rc::ptr_eq(&empty, &after));
    }

    #[test]
    fn test_brand_identity_walkthrough() {
        let state: Rc<PortfolioSelection> = Rc::default();
        assert!(!state.overlay_visible());

        let state = dispatch(state, SelectionAction::Select(brand_identity()));
        let shown = state.project().unwrap();
        assert!(state.overlay_visible());
        assert_eq!(shown.title, "Brand Identity");
        assert_eq!(shown.category, "Branding");
        assert_eq!(shown.results, "Global Brand Recognition");

        let state = click(state, &BACKDROP_CLICK);
        assert_eq!(state.selected(), None);
        assert!(!state.overlay_visible());
    }
}
