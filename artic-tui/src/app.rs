//! Main event loop.
//!
//! The loop owns the presentation state and redraws after every terminal
//! event, view change or spinner tick. Page fetches run as spawned tasks
//! against the shared [`ArtworkView`]; they report back only through the
//! view's change notification.

use std::time::Duration;

use artic_lib::api::PageRequest;
use artic_lib::view::ArtworkView;
use artic_lib::view::PageState;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyEvent;
use futures::StreamExt;
use log::debug;
use log::info;
use tokio::time::MissedTickBehavior;

use crate::error::AppError;
use crate::settings::Settings;
use crate::table::RenderContext;
use crate::table::TableAction;
use crate::table::TableState;
use crate::table::action_for;
use crate::table::larger_page_size;
use crate::table::render;
use crate::table::smaller_page_size;
use crate::terminal::TerminalGuard;
use crate::widgets::Spinner;

pub struct App {
    view: ArtworkView,
    table: TableState,
    /// Last page asked for. Leads the displayed page while a fetch is in flight.
    requested: PageRequest,
    placeholder: String,
    spinner_frames: Vec<String>,
    frame: usize,
    frame_duration: Duration,
}

impl App {
    pub fn new(view: ArtworkView, settings: &Settings) -> Self {
        let spinner = Spinner::new().track_width(6).snake_len(3);
        Self {
            requested: PageRequest::new(0, view.default_page_size()),
            view,
            table: TableState::new(),
            placeholder: settings.placeholder_image.clone(),
            spinner_frames: spinner.frames(),
            frame: 0,
            frame_duration: spinner.frame_duration(),
        }
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = TerminalGuard::new()?;
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(self.frame_duration);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let view = self.view.clone();

        self.mount();
        self.draw(&mut terminal)?;

        loop {
            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        debug!("Resized to {}x{}", width, height);
                        terminal.clear()?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = view.changed() => {
                    if !view.take_dirty() {
                        continue;
                    }
                }
                _ = tick.tick(), if view.is_loading() => {
                    self.frame = (self.frame + 1) % self.spinner_frames.len().max(1);
                }
            }
            self.draw(&mut terminal)?;
        }

        info!("Quit");
        Ok(())
    }

    /// Applies a key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = action_for(key) else {
            return false;
        };

        let page = self.view.page();
        let records = page.records();

        match action {
            TableAction::CursorUp => self.table.move_cursor(-1, records.len()),
            TableAction::CursorDown => self.table.move_cursor(1, records.len()),
            TableAction::CursorFirst => self.table.cursor_to_start(),
            TableAction::CursorLast => self.table.cursor_to_end(records.len()),
            TableAction::ToggleRow => {
                if let Some(next) = self.table.toggle_cursor_row(records, &self.view.selection()) {
                    self.view.on_selection_change(next);
                }
            }
            TableAction::TogglePage => {
                let next = self.view.selection().page_toggled(records);
                self.view.on_selection_change(next);
            }
            TableAction::NextPage => {
                if let Some(next) = self.current(&page).next(page.total()) {
                    self.turn_to(next);
                }
            }
            TableAction::PreviousPage => {
                if let Some(previous) = self.current(&page).previous() {
                    self.turn_to(previous);
                }
            }
            TableAction::LargerPageSize => {
                let current = self.current(&page);
                self.resize_page(current, larger_page_size(current.page_size));
            }
            TableAction::SmallerPageSize => {
                let current = self.current(&page);
                self.resize_page(current, smaller_page_size(current.page_size));
            }
            TableAction::Sort(n) => {
                if let Some((field, ascending)) = self.table.toggle_sort(n) {
                    debug!("Sort by {:?} (ascending: {})", field, ascending);
                    self.table.cursor_to_start();
                }
            }
            TableAction::Retry => self.retry(),
            TableAction::Quit => return true,
        }
        false
    }

    /// Page that navigation counts from. A failed fetch leaves the previous
    /// page on screen, so after a failure that page is the base again.
    fn current(&self, page: &PageState) -> PageRequest {
        if page.error().is_some() {
            page.request()
        } else {
            self.requested
        }
    }

    fn mount(&self) {
        info!("Loading first page ({} per page)", self.requested.page_size);
        let view = self.view.clone();
        tokio::spawn(async move {
            let _ = view.mount().await;
        });
    }

    /// Page-change event: fetch exactly the requested page.
    fn turn_to(&mut self, request: PageRequest) {
        self.requested = request;
        self.table.cursor_to_start();

        let view = self.view.clone();
        tokio::spawn(async move {
            let _ = view
                .on_page_change(request.page_index, request.page_size)
                .await;
        });
    }

    fn resize_page(&mut self, current: PageRequest, page_size: usize) {
        if page_size == current.page_size {
            return;
        }
        let page_index = resized_page_index(current, page_size);
        self.turn_to(PageRequest::new(page_index, page_size));
    }

    fn retry(&mut self) {
        let Some(request) = self.view.failed_request() else {
            return;
        };
        info!("Retrying page {}", request.page_number());
        self.requested = request;

        let view = self.view.clone();
        tokio::spawn(async move {
            let _ = view.retry().await;
        });
    }

    fn draw(&mut self, terminal: &mut TerminalGuard) -> Result<(), AppError> {
        let (width, height) = terminal.size()?;
        let page = self.view.page();
        let selection = self.view.selection();
        self.table.clamp_cursor(page.records().len());

        let spinner = self
            .spinner_frames
            .get(self.frame)
            .map(String::as_str)
            .unwrap_or("");
        let lines = render(&RenderContext {
            page: &page,
            selection: &selection,
            table: &self.table,
            placeholder: &self.placeholder,
            spinner,
            width,
            height,
        });
        terminal.draw(&lines)?;
        Ok(())
    }
}

/// Page that keeps the first row of `current` on screen at `page_size`.
fn resized_page_index(current: PageRequest, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    current.page_index * current.page_size / page_size
}
