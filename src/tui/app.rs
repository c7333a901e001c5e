use anyhow::Result;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{CatalogApi, PokeApiClient, PokemonDetail};
use crate::config::Config;
use crate::loader::{LoadedPage, PageDataLoader};
use crate::pagination::{PageWindow, PaginationSession};
use crate::tui::{
    components::{CatalogTable, DetailPanel, PaginationBar},
    events::Event,
    keys::KeyMap,
    styles::Theme,
    Frame,
};

/// Fatal-load message shown when the list endpoint cannot be reached.
const LOAD_ERROR_MESSAGE: &str = "Oops! Unable to load Pokémon. Please try again later.";

/// Main application state and controller
pub struct App<C: CatalogApi + 'static> {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Current theme for styling
    pub theme: Theme,

    /// Pagination state: page size, total, reference, load sequence
    pub session: PaginationSession,

    /// The sliding 3-slot page-number window
    pub window: PageWindow,

    /// The page currently on screen
    pub page: Option<LoadedPage>,

    /// Whether a page load is in flight
    pub loading: bool,

    /// Selected table row within the current page
    pub selected_row: usize,

    /// Detail record for the selected entry, if fetched
    pub detail: Option<PokemonDetail>,

    /// Whether the detail panel is visible
    pub show_detail: bool,

    /// Show help overlay
    pub show_help: bool,

    /// Set once the list endpoint has failed; ends the session's browsing
    pub fatal_error: Option<String>,

    /// Transient status message
    pub status_message: Option<String>,

    loader: Arc<PageDataLoader<C>>,
    event_sender: mpsc::UnboundedSender<Event>,
}

impl App<PokeApiClient> {
    /// Create an application backed by the real PokéAPI
    pub fn new(config: &Config, event_sender: mpsc::UnboundedSender<Event>) -> Result<Self> {
        let api = Arc::new(PokeApiClient::new(&config.api_base_url));
        Ok(Self::with_api(api, config.page_size, event_sender))
    }
}

impl<C: CatalogApi + 'static> App<C> {
    pub fn with_api(
        api: Arc<C>,
        page_size: u64,
        event_sender: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let loader = Arc::new(PageDataLoader::new(api, page_size));

        Self {
            should_quit: false,
            size: Rect::default(),
            key_map: KeyMap::default(),
            theme: Theme::default(),
            session: PaginationSession::new(page_size),
            window: PageWindow::new(),
            page: None,
            loading: false,
            selected_row: 0,
            detail: None,
            show_detail: false,
            show_help: false,
            fatal_error: None,
            status_message: None,
            loader,
            event_sender,
        }
    }

    /// Kick off the load for the starting page
    pub fn request_initial_page(&mut self) {
        self.request_page(1);
    }

    /// Issue a tagged load for `reference` and clear the detail panel.
    /// Every navigation hides the detail panel before the next page
    /// renders.
    fn request_page(&mut self, reference: u64) {
        self.detail = None;
        self.show_detail = false;
        self.status_message = None;
        self.loading = true;

        let seq = self.session.begin_load();
        let loader = self.loader.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let event = match loader.load(reference).await {
                Ok(page) => Event::PageLoaded {
                    seq,
                    page: Box::new(page),
                },
                Err(e) => Event::PageLoadFailed {
                    seq,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(event);
        });
    }

    /// Fetch the detail record for the selected row. Tagged with the
    /// current navigation sequence so a fetch that resolves after the
    /// user has paged away is discarded.
    fn request_detail(&mut self) {
        let Some(page) = &self.page else {
            return;
        };
        let Some(row) = page.rows.get(self.selected_row) else {
            return;
        };

        let seq = self.session.current_seq();
        let url = row.detail_url.clone();
        let api = self.loader.api().clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let event = match api.fetch_detail(&url).await {
                Ok(detail) => Event::DetailLoaded {
                    seq,
                    detail: Box::new(detail),
                },
                Err(e) => Event::DetailLoadFailed {
                    seq,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(event);
        });
    }

    /// Handle incoming events. Returns true when the app should quit.
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                if self.key_map.should_show_help(&key_event) {
                    self.show_help = !self.show_help;
                    return Ok(false);
                }

                // After a fatal load error only quit/help remain active
                if self.fatal_error.is_none() {
                    self.handle_navigation_key(key_event);
                }
            }

            Event::Resize(width, height) => {
                self.size = Rect::new(0, 0, width, height);
            }

            Event::Tick => {}

            Event::PageLoaded { seq, page } => {
                if !self.session.is_current(seq) {
                    debug!("discarding stale page load (seq {})", seq);
                } else {
                    self.apply_page(*page);
                }
            }

            Event::PageLoadFailed { seq, message } => {
                if !self.session.is_current(seq) {
                    debug!("discarding stale page failure (seq {})", seq);
                } else {
                    debug!("page load failed: {}", message);
                    self.loading = false;
                    self.fatal_error = Some(LOAD_ERROR_MESSAGE.to_string());
                }
            }

            Event::DetailLoaded { seq, detail } => {
                if !self.session.is_current(seq) {
                    debug!("discarding stale detail load (seq {})", seq);
                } else {
                    self.detail = Some(*detail);
                    self.show_detail = true;
                }
            }

            Event::DetailLoadFailed { seq, message } => {
                if self.session.is_current(seq) {
                    self.status_message = Some(format!("Could not load details: {}", message));
                }
            }
        }

        Ok(self.should_quit)
    }

    fn handle_navigation_key(&mut self, key_event: crossterm::event::KeyEvent) {
        if self.key_map.row_up.matches(&key_event) {
            self.selected_row = self.selected_row.saturating_sub(1);
            return;
        }
        if self.key_map.row_down.matches(&key_event) {
            if let Some(page) = &self.page {
                if self.selected_row + 1 < page.rows.len() {
                    self.selected_row += 1;
                }
            }
            return;
        }
        if self.key_map.open_detail.matches(&key_event) {
            self.request_detail();
            return;
        }
        if self.key_map.toggle_detail.matches(&key_event) {
            if self.detail.is_some() {
                self.show_detail = !self.show_detail;
            }
            return;
        }

        // Pagination needs the remote total; until the first page has
        // loaded there is nothing to clamp against.
        let Some(total_pages) = self.session.total_pages() else {
            return;
        };

        if self.key_map.prev_page.matches(&key_event) {
            if self.window.go_prev() {
                let reference = self.session.reference() - 1;
                self.session.set_reference(reference);
                self.request_page(reference);
            }
            self.window.highlight(self.session.reference());
        } else if self.key_map.next_page.matches(&key_event) {
            if self.window.go_next(total_pages) {
                let reference = self.session.reference() + 1;
                self.session.set_reference(reference);
                self.request_page(reference);
            }
            self.window.highlight(self.session.reference());
        } else if self.key_map.first_page.matches(&key_event) {
            let reference = self.window.reset_to_first();
            self.session.set_reference(reference);
            self.request_page(reference);
        } else if self.key_map.last_page.matches(&key_event) {
            let reference = self.window.reset_to_last(total_pages);
            self.session.set_reference(reference);
            self.request_page(reference);
        } else if let Some(slot) = self.key_map.slot_for(&key_event) {
            if let Some(reference) = self.window.select_slot(slot, total_pages) {
                self.session.set_reference(reference);
                self.request_page(reference);
            }
        }
    }

    fn apply_page(&mut self, page: LoadedPage) {
        self.session.record_total(page.total_count);
        self.window.highlight(self.session.reference());
        self.selected_row = 0;
        self.loading = false;
        self.page = Some(page);
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.size = frame.size();

        if let Some(message) = &self.fatal_error {
            self.render_fatal_error(frame, message.clone());
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Table / detail
                Constraint::Length(1), // Pagination bar
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        self.render_content(frame, chunks[0]);
        self.render_pagination(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let show_panel = self.show_detail && self.detail.is_some();
        let (table_area, detail_area) = if show_panel {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (halves[0], Some(halves[1]))
        } else {
            (area, None)
        };

        match &self.page {
            Some(page) => {
                CatalogTable::render(frame, table_area, &self.theme, page, self.selected_row);
            }
            None => {
                let placeholder = Paragraph::new("Loading Pokédex…")
                    .alignment(Alignment::Center)
                    .style(self.theme.dim_style())
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Pokédex")
                            .border_style(self.theme.border_style()),
                    );
                frame.render_widget(placeholder, table_area);
            }
        }

        if let (Some(detail_area), Some(detail)) = (detail_area, &self.detail) {
            DetailPanel::render(frame, detail_area, &self.theme, detail);
        }
    }

    fn render_pagination(&self, frame: &mut Frame, area: Rect) {
        let Some(total_pages) = self.session.total_pages() else {
            return;
        };
        PaginationBar::render(
            frame,
            area,
            &self.theme,
            &self.window,
            total_pages,
            self.session.reference(),
            self.loading,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = if let Some(message) = &self.status_message {
            message.clone()
        } else {
            self.key_map.status_hint()
        };

        let status = Paragraph::new(status_text).style(self.theme.status_bar_style());
        frame.render_widget(status, area);
    }

    fn render_fatal_error(&self, frame: &mut Frame, message: String) {
        // Table and pagination are hidden for the rest of the session
        let error = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(self.theme.error_style())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Error"));
        frame.render_widget(error, centered_rect(60, 20, frame.size()));
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let help_area = centered_rect(50, 60, frame.size());

        let help = Paragraph::new(self.key_map.help_text())
            .style(self.theme.text_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .border_style(self.theme.border_style()),
            );
        frame.render_widget(help, help_area);
    }
}

/// Create a centered rectangle with given percentage of the screen
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::{ApiError, ApiResult};
    use crate::api::types::{PagedList, Sprites};
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct EmptyCatalog;

    #[async_trait]
    impl CatalogApi for EmptyCatalog {
        async fn list_page(&self, _offset: u64, _limit: u64) -> ApiResult<PagedList> {
            Ok(PagedList {
                count: 100,
                results: vec![],
            })
        }

        async fn fetch_detail(&self, url: &str) -> ApiResult<PokemonDetail> {
            Err(ApiError::StatusError {
                status: 404,
                url: url.to_string(),
            })
        }
    }

    fn test_app() -> App<EmptyCatalog> {
        let (sender, _receiver) = mpsc::unbounded_channel();
        App::with_api(Arc::new(EmptyCatalog), 10, sender)
    }

    fn sample_detail() -> PokemonDetail {
        PokemonDetail {
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            sprites: Sprites {
                front_default: Some("sprite.png".to_string()),
            },
            types: vec![],
            moves: vec![],
            abilities: vec![],
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_navigation_hides_detail_panel() {
        let mut app = test_app();
        app.session.record_total(100);
        app.detail = Some(sample_detail());
        app.show_detail = true;

        app.handle_event(key(KeyCode::Right)).await.unwrap();

        assert!(app.detail.is_none());
        assert!(!app.show_detail);
        assert_eq!(app.session.reference(), 2);
    }

    #[tokio::test]
    async fn test_next_at_last_window_is_a_no_op() {
        let mut app = test_app();
        app.session.record_total(25); // 3 pages
        app.window.reset_to_last(3);
        app.session.set_reference(3);
        let seq_before = app.session.current_seq();

        app.handle_event(key(KeyCode::Right)).await.unwrap();

        assert_eq!(app.window.slots(), [1, 2, 3]);
        assert_eq!(app.session.reference(), 3);
        // No new load was issued
        assert_eq!(app.session.current_seq(), seq_before);
    }

    #[tokio::test]
    async fn test_prev_after_last_jump_with_single_page_is_a_no_op() {
        let mut app = test_app();
        app.session.record_total(5); // a single page

        app.handle_event(key(KeyCode::End)).await.unwrap();
        assert_eq!(app.window.slots(), [-1, 0, 1]);
        assert_eq!(app.session.reference(), 1);
        let seq_before = app.session.current_seq();

        // Prev must stay disabled: the window can never walk below page 1
        app.handle_event(key(KeyCode::Left)).await.unwrap();

        assert_eq!(app.window.slots(), [-1, 0, 1]);
        assert_eq!(app.session.reference(), 1);
        assert_eq!(app.session.current_seq(), seq_before);
    }

    #[tokio::test]
    async fn test_stale_page_load_is_discarded() {
        let mut app = test_app();
        let stale = app.session.begin_load();
        let current = app.session.begin_load();

        let make_page = |reference: u64| {
            Box::new(LoadedPage {
                reference,
                offset: (reference - 1) * 10,
                total_count: 100,
                rows: vec![],
            })
        };

        app.handle_event(Event::PageLoaded {
            seq: stale,
            page: make_page(2),
        })
        .await
        .unwrap();
        assert!(app.page.is_none());

        app.handle_event(Event::PageLoaded {
            seq: current,
            page: make_page(3),
        })
        .await
        .unwrap();
        assert_eq!(app.page.as_ref().unwrap().reference, 3);
        assert_eq!(app.session.total_count(), Some(100));
    }

    #[tokio::test]
    async fn test_list_failure_is_fatal_for_the_session() {
        let mut app = test_app();
        let seq = app.session.begin_load();

        app.handle_event(Event::PageLoadFailed {
            seq,
            message: "boom".to_string(),
        })
        .await
        .unwrap();

        assert!(app.fatal_error.is_some());

        // Navigation is dead afterwards
        app.session.record_total(100);
        app.handle_event(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.window.slots(), [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_navigation_ignored_until_total_known() {
        let mut app = test_app();
        let seq_before = app.session.current_seq();

        app.handle_event(key(KeyCode::Right)).await.unwrap();
        app.handle_event(key(KeyCode::End)).await.unwrap();

        assert_eq!(app.window.slots(), [1, 2, 3]);
        assert_eq!(app.session.reference(), 1);
        assert_eq!(app.session.current_seq(), seq_before);
    }

    #[tokio::test]
    async fn test_slot_selection_reloads_and_moves_window() {
        let mut app = test_app();
        app.session.record_total(100); // 10 pages
        let seq_before = app.session.current_seq();

        app.handle_event(key(KeyCode::Char('3'))).await.unwrap();

        // Right-slot click away from the edge: window catches up by two
        assert_eq!(app.window.slots(), [3, 4, 5]);
        assert_eq!(app.session.reference(), 3);
        assert_eq!(app.session.offset(), 20);
        assert!(app.session.current_seq() > seq_before);
    }

    #[tokio::test]
    async fn test_stale_detail_load_is_discarded() {
        let mut app = test_app();
        let seq = app.session.current_seq();
        app.session.begin_load(); // navigation happened since

        app.handle_event(Event::DetailLoaded {
            seq,
            detail: Box::new(sample_detail()),
        })
        .await
        .unwrap();

        assert!(app.detail.is_none());
        assert!(!app.show_detail);
    }

    #[tokio::test]
    async fn test_detail_failure_becomes_status_message() {
        let mut app = test_app();
        let seq = app.session.current_seq();

        app.handle_event(Event::DetailLoadFailed {
            seq,
            message: "404".to_string(),
        })
        .await
        .unwrap();

        assert!(app.status_message.as_ref().unwrap().contains("404"));
        assert!(app.fatal_error.is_none());
    }
}
