use std::io::Error;
use url::ParseError;

#[derive(Debug)]
pub enum AppError {
    IoError(Error),
    InvalidUrl(ParseError),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::InvalidUrl(err)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub event_poll_time: u64,
    pub order_param: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            event_poll_time: 100,
            order_param: crate::controller::DEFAULT_ORDER_PARAM.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    MoveLeft,
    MoveRight,
    ToggleSort,
}
