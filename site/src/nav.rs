// mobile navigation menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    // link activation, or a click outside both the toggle and the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    // a document click closes an open menu unless it landed on the toggle or the menu
    pub fn closes_on_click(&self, in_toggle: bool, in_menu: bool) -> bool {
        self.open && !in_toggle && !in_menu
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    // the stylesheet keys off an extra "active" class on both the menu and its toggle
    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{base} active")
        } else {
            base.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.class("nav-menu"), "nav-menu");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class("nav-toggle"), "nav-toggle active");

        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_clicks_only_close_an_open_menu() {
        let mut menu = NavMenu::default();
        assert!(!menu.closes_on_click(false, false));

        menu.toggle();
        assert!(menu.closes_on_click(false, false));
        assert!(!menu.closes_on_click(true, false));
        assert!(!menu.closes_on_click(false, true));
    }
}
