use crate::routes::Route;

/// A fixed navigation entry
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub fn links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", route: Route::Home },
        NavLink { label: "Login", route: Route::Login },
        NavLink { label: "Register", route: Route::Register },
    ]
}

/// Navigation bar state: only the drawer flag and its highlighted entry
#[derive(Clone, Debug, Default)]
pub struct NavBar {
    pub drawer_open: bool,
    pub selected: usize,
}

impl NavBar {
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % links().len();
    }

    pub fn prev(&mut self) {
        let len = links().len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Follow the highlighted drawer link and close the drawer
    pub fn select(&mut self) -> Option<Route> {
        let route = links().get(self.selected).map(|l| l.route.clone());
        self.drawer_open = false;
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_toggle_and_select() {
        let mut nav = NavBar::default();
        nav.toggle_drawer();
        assert!(nav.drawer_open);
        nav.prev();
        assert_eq!(nav.select(), Some(Route::Register));
        assert!(!nav.drawer_open);

        nav.toggle_drawer();
        nav.toggle_drawer();
        assert!(!nav.drawer_open);
    }
}
