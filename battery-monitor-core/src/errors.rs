use thiserror::Error;

/// the conversion and health checks are total, so the only thing that can
/// actually fail in this crate is the report codec.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("postcard error: {0:?}")]
    Postcard(#[from] postcard::Error),
}

pub type MonitorResult<T> = Result<T, MonitorError>;
