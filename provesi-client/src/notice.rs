//! User-visible failure notices
//!
//! Remote and validation failures never abort a session; they are recorded
//! as non-blocking notices the rendering layer can show and dismiss.

use std::collections::VecDeque;

use shared::ErrorCode;

use crate::ClientError;

const MAX_NOTICES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub code: ErrorCode,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            code: ErrorCode::Success,
            message: message.into(),
        }
    }

    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn from_error(context: &str, err: &ClientError) -> Self {
        Self {
            level: NoticeLevel::Error,
            code: err.code(),
            message: format!("{context}: {err}"),
        }
    }
}

/// Bounded notice queue, oldest dropped first
#[derive(Debug, Default, Clone)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        if self.queue.len() == MAX_NOTICES {
            self.queue.pop_front();
        }
        self.queue.push_back(notice);
    }

    /// Record a failure. Superseded requests are not failures and are skipped.
    pub fn push_error(&mut self, context: &str, err: &ClientError) {
        if err.is_superseded() {
            return;
        }
        tracing::warn!(code = %err.code(), error = %err, "{context}");
        self.push(Notice::from_error(context, err));
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every pending notice
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }
}
