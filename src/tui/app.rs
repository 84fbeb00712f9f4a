use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::domain::Earthquake;
use crate::fetcher::loader::Earthquakes;
use crate::presenter::{DisplayTimezone, RowCache};

pub const PAGE_SIZE: usize = 10;

pub struct TuiApp {
    pub earthquakes: Earthquakes,
    pub index: usize,
    pub list_state: ListState,
    pub rows: RowCache,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_loading: bool,
}

impl TuiApp {
    pub fn new(timezone: DisplayTimezone) -> Self {
        Self {
            earthquakes: Arc::new(Vec::new()),
            index: 0,
            list_state: ListState::default(),
            rows: RowCache::new(timezone),
            should_quit: false,
            status_message: None,
            is_loading: false,
        }
    }

    /// Swap in a freshly loaded list. The previous list and its rows are
    /// dropped entirely.
    pub fn replace_earthquakes(&mut self, earthquakes: Earthquakes) {
        self.earthquakes = earthquakes;
        self.rows.clear();
        self.index = 0;

        if self.earthquakes.is_empty() {
            self.list_state.select(None);
            self.set_status("No earthquakes found".to_string());
        } else {
            self.list_state.select(Some(0));
            self.clear_status();
        }
    }

    /// The record under the cursor, or `None` when the list is empty.
    pub fn selected_earthquake(&self) -> Option<&Earthquake> {
        if self.earthquakes.is_empty() {
            return None;
        }
        match self.earthquakes.get(self.index) {
            Some(quake) => Some(quake),
            None => unreachable!(
                "selection {} outside {} earthquakes",
                self.index,
                self.earthquakes.len()
            ),
        }
    }

    fn select(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.list_state.select(Some(index));
        }
    }

    fn last_index(&self) -> usize {
        self.earthquakes.len().saturating_sub(1)
    }

    pub fn move_up(&mut self) {
        self.select(self.index.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        self.select((self.index + 1).min(self.last_index()));
    }

    pub fn next_page(&mut self) {
        self.select((self.index + PAGE_SIZE).min(self.last_index()));
    }

    pub fn prev_page(&mut self) {
        self.select(self.index.saturating_sub(PAGE_SIZE));
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quakes(n: usize) -> Earthquakes {
        Arc::new(
            (0..n)
                .map(|i| {
                    Earthquake::new(
                        6.0 + i as f64 / 10.0,
                        format!("{}km N of Place {}", i, i),
                        1_000_000_000_000 + i as i64,
                        format!("https://earthquake.usgs.gov/earthquakes/eventpage/{}", i),
                    )
                    .unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_app_has_no_selection() {
        let app = TuiApp::new(DisplayTimezone::Utc);
        assert!(app.selected_earthquake().is_none());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_replace_selects_first_row() {
        let mut app = TuiApp::new(DisplayTimezone::Utc);
        app.replace_earthquakes(quakes(3));

        assert_eq!(app.index, 0);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.selected_earthquake().unwrap().location, "0km N of Place 0");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_replace_with_empty_list_reports_status() {
        let mut app = TuiApp::new(DisplayTimezone::Utc);
        app.replace_earthquakes(quakes(3));
        app.move_down();
        app.replace_earthquakes(quakes(0));

        assert_eq!(app.index, 0);
        assert!(app.selected_earthquake().is_none());
        assert_eq!(app.status_message.as_deref(), Some("No earthquakes found"));
    }

    #[test]
    fn test_replace_resets_selection_and_rows() {
        let mut app = TuiApp::new(DisplayTimezone::Utc);
        app.replace_earthquakes(quakes(5));
        app.move_down();
        app.move_down();
        let quake = app.earthquakes[2].clone();
        app.rows.row(2, &quake);

        app.replace_earthquakes(quakes(2));
        assert_eq!(app.index, 0);
        assert!(app.rows.is_empty());
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut app = TuiApp::new(DisplayTimezone::Utc);
        app.replace_earthquakes(quakes(3));

        app.move_up();
        assert_eq!(app.index, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.index, 2);
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn test_paging() {
        let mut app = TuiApp::new(DisplayTimezone::Utc);
        app.replace_earthquakes(quakes(25));

        app.next_page();
        assert_eq!(app.index, 10);
        app.next_page();
        app.next_page();
        assert_eq!(app.index, 24);
        app.prev_page();
        assert_eq!(app.index, 14);
        app.prev_page();
        app.prev_page();
        assert_eq!(app.index, 0);
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut app = TuiApp::new(DisplayTimezone::Utc);
        app.move_down();
        app.next_page();
        assert_eq!(app.index, 0);
        assert!(app.selected_earthquake().is_none());
    }
}
