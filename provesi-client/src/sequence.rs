//! Request sequencing
//!
//! Overlapping requests for the same context may complete out of order.
//! Every request takes a [`Ticket`] from the context's [`RequestSequencer`];
//! issuing a new ticket cancels the previous one, and only the latest ticket
//! may write its result back.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientResult};

/// Result of writing a response back into local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A newer request owns the state; the response was dropped
    Discarded,
}

/// Handle for one in-flight request
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    token: CancellationToken,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` unless this ticket is cancelled first.
    ///
    /// A cancelled ticket resolves to [`ClientError::Superseded`] and drops
    /// the request future.
    pub async fn run<T, F>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ClientError::Superseded),
            result = fut => result,
        }
    }
}

/// Monotonic ticket source for one request context
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
    in_flight: Option<CancellationToken>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, cancelling the one before it
    pub fn issue(&mut self) -> Ticket {
        self.cancel_in_flight();
        self.latest += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        Ticket {
            seq: self.latest,
            token,
        }
    }

    /// Cancel the outstanding ticket and make every issued ticket stale
    pub fn invalidate(&mut self) {
        self.cancel_in_flight();
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.seq == self.latest && !ticket.is_cancelled()
    }

    /// Mark `ticket` settled. Returns false when it is stale.
    pub fn settle(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest,
                "Discarding stale response"
            );
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_supersedes_old() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(first.is_cancelled());
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
        assert!(!seq.settle(&first));
        assert!(seq.settle(&second));
        assert_eq!(second.seq(), 2);
    }

    #[test]
    fn test_invalidate() {
        let mut seq = RequestSequencer::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(ticket.is_cancelled());
        assert!(!seq.settle(&ticket));
        assert_eq!(seq.latest(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_ticket_drops_request() {
        let mut seq = RequestSequencer::new();
        let stale = seq.issue();
        let _fresh = seq.issue();

        let result: ClientResult<u32> = stale
            .run(async {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                Ok(1)
            })
            .await;
        assert!(matches!(result, Err(ClientError::Superseded)));
    }

    #[tokio::test]
    async fn test_live_ticket_completes() {
        let mut seq = RequestSequencer::new();
        let ticket = seq.issue();
        let result = ticket.run(async { Ok::<_, ClientError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
