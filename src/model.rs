use tracing::{info, trace};
use url::Url;

use crate::controller::SortToggle;
use crate::domain::{AppConfig, AppError, Message};
use crate::header::{Header, HeaderSet};
use crate::location::{self, Navigation};
use crate::sort::SortState;

#[derive(Debug, PartialEq)]
pub enum Status {
    READY,
    QUITTING,
}

// Fixture table standing in for the server rendered rows.
const COLUMNS: [(&str, &str); 4] = [
    ("date", "Date"),
    ("client", "Client"),
    ("invoice", "Invoice"),
    ("total", "Total"),
];

const ROWS: [[&str; 4]; 6] = [
    ["2025-03-14", "Globex", "F-0021", "1450.00"],
    ["2025-01-09", "Acme", "F-0007", "2300.00"],
    ["2025-02-27", "Initech", "F-0013", "1890.00"],
    ["2025-04-02", "Umbrella", "F-0029", "3125.00"],
    ["2025-01-30", "Stark", "F-0009", "2710.00"],
    ["2025-03-01", "Wayne", "F-0017", "1055.00"],
];

pub struct Model {
    pub status: Status,
    url: Url,
    headers: HeaderSet,
    rows: Vec<Vec<String>>,
    selected: usize,
    controller: SortToggle,
    order_param: String,
    status_message: String,
}

impl Model {
    pub fn init(cfg: &AppConfig, url: Url) -> Self {
        let mut model = Model {
            status: Status::READY,
            url: url.clone(),
            headers: HeaderSet::default(),
            rows: Vec::new(),
            selected: 0,
            controller: SortToggle::new(cfg.order_param.clone()),
            order_param: cfg.order_param.clone(),
            status_message: String::new(),
        };
        model.reload(url);
        model
    }

    /// Simulates the full page reload: the "server" re-renders the rows in
    /// the requested order, the header set comes up clean and the controller
    /// re-runs its load time initialization from the url alone.
    fn reload(&mut self, url: Url) {
        self.url = url;
        self.rows = Self::render_rows(&self.url, &self.order_param);
        self.headers = HeaderSet::new(
            COLUMNS
                .iter()
                .map(|(key, title)| Header::new(*key, *title))
                .collect(),
        );
        self.controller.initialize(&self.url, &mut self.headers);
        self.update_status_message();
    }

    // The out of scope server collaborator, reduced to a string sort over
    // the fixture. Unknown columns leave the order untouched, like a server
    // ignoring a directive it cannot resolve.
    fn render_rows(url: &Url, order_param: &str) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = ROWS
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        if let Some(directive) = location::read_directive(url, order_param)
            && let Some(idx) = COLUMNS.iter().position(|(key, _)| *key == directive.column)
        {
            if directive.ascending {
                rows.sort_by(|a, b| a[idx].cmp(&b[idx]));
            } else {
                rows.sort_by(|a, b| b[idx].cmp(&a[idx]));
            }
        }
        rows
    }

    pub fn update(&mut self, message: Message) -> Result<(), AppError> {
        trace!("Update: {message:?}");
        match message {
            Message::Quit => self.quit(),
            Message::MoveLeft => self.selected = self.selected.saturating_sub(1),
            Message::MoveRight => {
                if self.selected + 1 < self.headers.len() {
                    self.selected += 1;
                }
            }
            Message::ToggleSort => self.toggle_selected(),
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.status = Status::QUITTING;
    }

    fn toggle_selected(&mut self) {
        let Some(key) = self.headers.get(self.selected).map(|h| h.key.clone()) else {
            return;
        };
        let Navigation { target } = self.controller.toggle(&key, &self.url, &mut self.headers);
        info!("Navigating to {target}");
        self.reload(target);
    }

    fn update_status_message(&mut self) {
        self.status_message = match self.headers.active() {
            Some(h) if h.state == SortState::Ascending => {
                format!("Sorted by {}, ascending", h.title)
            }
            Some(h) => format!("Sorted by {}, descending", h.title),
            None => "Unsorted".to_string(),
        };
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}
