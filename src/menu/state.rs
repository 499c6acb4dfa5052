// App state machine and main menu state

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Title screen
    Menu,
    /// A round in progress
    Playing,
    /// Score card for the round that just ended
    GameOver { score: u32 },
    /// Graceful shutdown
    Exiting,
}

/// Menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Quit,
}

impl MenuItem {
    /// Get display text for menu item
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Quit => "Quit",
        }
    }

    /// Get all menu items in order
    pub fn all() -> Vec<MenuItem> {
        vec![MenuItem::Play, MenuItem::Quit]
    }

    /// Screen this item leads to
    pub fn target(&self) -> AppState {
        match self {
            MenuItem::Play => AppState::Playing,
            MenuItem::Quit => AppState::Exiting,
        }
    }
}

/// Menu state
pub struct MenuState {
    /// Currently selected menu item index
    pub selected_index: usize,
    /// All menu items
    pub items: Vec<MenuItem>,
    /// Best score so far, shown under the title
    pub best_score: u32,
}

impl MenuState {
    pub fn new(best_score: u32) -> Self {
        Self {
            selected_index: 0,
            items: MenuItem::all(),
            best_score,
        }
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down, wrapping to the top
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }
}
