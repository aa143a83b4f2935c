use std::fmt;
use std::io::{self, Read};

use super::task::TaskRecord;
use crate::core::Ticks;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A burst time of zero or less cannot be rotated to completion.
    DegenerateBurst { name: String, burst: i64 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "reading task records: {err}"),
            Self::DegenerateBurst { name, burst } => {
                write!(f, "task '{name}' has non-positive burst time {burst}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::DegenerateBurst { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Read whitespace-separated `name priority burst` triples until the input
/// ends or a record fails to parse. Records before the malformed one remain
/// valid; the tail is dropped without error.
pub fn load_batch<R: Read>(mut reader: R) -> Result<Vec<TaskRecord>, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let mut batch = Vec::new();

    loop {
        let Some(name) = tokens.next() else { break };
        let Some(priority) = tokens.next().and_then(|t| t.parse::<i64>().ok()) else {
            log::debug!("input ended at malformed record after {} tasks", batch.len());
            break;
        };
        let Some(burst) = tokens.next().and_then(|t| t.parse::<i64>().ok()) else {
            log::debug!("input ended at malformed record after {} tasks", batch.len());
            break;
        };

        if burst <= 0 {
            return Err(LoadError::DegenerateBurst {
                name: name.to_owned(),
                burst,
            });
        }

        batch.push(TaskRecord::new(name, priority, burst as Ticks));
    }

    Ok(batch)
}
