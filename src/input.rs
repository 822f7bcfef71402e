use std::time::Duration;
use tracing::trace;

use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::domain::{AppConfig, AppError, Message};

pub struct Input {
    event_poll_time: u64,
}

impl Input {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            event_poll_time: cfg.event_poll_time,
        }
    }

    pub fn poll(&self) -> Result<Option<Message>, AppError> {
        if event::poll(Duration::from_millis(self.event_poll_time))?
            && let Event::Key(key) = event::read()?
                && key.kind == event::KeyEventKind::Press {
                    return Ok(self.handle_key(key));
                }
        Ok(None)
    }

    fn handle_key(&self, key: event::KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Left | KeyCode::Char('h') => Some(Message::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Message::MoveRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleSort),
            _ => None,
        };
        trace!("Mapped: {key:?} => {message:?}");
        message
    }
}
