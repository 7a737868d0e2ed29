//! Local UI chrome state (current page, header dropdown).
//!
//! DESIGN
//! ======
//! Page switching is plain state rather than URL routing: the header and the
//! form callbacks move between pages by updating this model.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which body page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    SignIn,
    SignUp,
}

/// UI state for the page body and the header menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub page: Page,
    pub dropdown_open: bool,
}

impl UiState {
    /// Switch pages and close the dropdown.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.dropdown_open = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// A pointer press somewhere on the page. Presses outside the profile
    /// menu close the dropdown.
    pub fn press(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.dropdown_open = false;
        }
    }
}
