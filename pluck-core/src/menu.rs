//! Contextual action panel state
//!
//! The presenter only tracks visibility and placement. It never holds
//! selection data; actions are dispatched back into the controller.

/// Actions offered by the floating menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Export,
    Placeholder(u8),
    ClearAll,
}

impl MenuAction {
    pub fn all() -> &'static [MenuAction] {
        &[
            MenuAction::Export,
            MenuAction::Placeholder(2),
            MenuAction::Placeholder(3),
            MenuAction::ClearAll,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Export => "Add context",
            MenuAction::Placeholder(_) => "•••",
            MenuAction::ClearAll => "Clear All",
        }
    }
}

/// Container geometry in viewport coordinates plus the page scroll
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerBox {
    pub left: f64,
    pub bottom: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAnchor {
    /// Page coordinates, e.g. a pointer position or a selection's end
    Point { x: f64, y: f64 },
    BelowContainer,
}

/// Absolute page position of the menu's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone)]
pub struct MenuPresenter {
    offset: f64,
    visible: bool,
    position: Option<MenuPosition>,
}

impl MenuPresenter {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            visible: false,
            position: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Option<MenuPosition> {
        self.position
    }

    pub fn show(&mut self, anchor: MenuAnchor, container: &ContainerBox) -> MenuPosition {
        let position = match anchor {
            MenuAnchor::Point { x, y } => MenuPosition { left: x, top: y },
            MenuAnchor::BelowContainer => MenuPosition {
                left: container.left + container.scroll_x,
                top: container.bottom + container.scroll_y + self.offset,
            },
        };
        self.visible = true;
        self.position = Some(position);
        tracing::info!(left = position.left, top = position.top, "menu shown");
        position
    }

    /// Returns false when the menu was already hidden
    pub fn hide(&mut self) -> bool {
        let was_visible = std::mem::replace(&mut self.visible, false);
        if was_visible {
            tracing::info!("menu hidden");
        }
        was_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_container_uses_offset_and_scroll() {
        let mut menu = MenuPresenter::new(10.0);
        let container = ContainerBox {
            left: 20.0,
            bottom: 300.0,
            scroll_x: 0.0,
            scroll_y: 50.0,
        };

        let pos = menu.show(MenuAnchor::BelowContainer, &container);
        assert_eq!(pos, MenuPosition { left: 20.0, top: 360.0 });
        assert!(menu.is_visible());
    }

    #[test]
    fn test_point_anchor_is_used_verbatim() {
        let mut menu = MenuPresenter::new(10.0);
        let pos = menu.show(MenuAnchor::Point { x: 5.0, y: 7.5 }, &ContainerBox::default());
        assert_eq!(pos, MenuPosition { left: 5.0, top: 7.5 });
        assert_eq!(menu.position(), Some(pos));
    }

    #[test]
    fn test_hide_reports_transition() {
        let mut menu = MenuPresenter::new(10.0);
        assert!(!menu.hide());
        menu.show(MenuAnchor::BelowContainer, &ContainerBox::default());
        assert!(menu.hide());
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_action_order() {
        let labels: Vec<_> = MenuAction::all().iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Add context", "•••", "•••", "Clear All"]);
    }
}
