//! Delivery of finished records.
//!
//! The wizard only knows the [`NotificationSender`] trait: it hands over the
//! completed record and learns success or failure. What a failure means is
//! opaque to the wizard; every error maps to the same session state.
//!
//! Two senders ship with the crate:
//!
//! - [`SimulatedSender`]: waits, then reports success. Stands in when no
//!   transport is configured.
//! - [`OutboxSender`]: writes a JSON envelope per submission into a
//!   directory for a mail relay to pick up.

pub mod message;
pub mod outbox;
pub mod simulated;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::Result, models::ProjectRecord};

pub use message::NotificationMessage;
pub use outbox::{OutboxEnvelope, OutboxSender};
pub use simulated::SimulatedSender;

/// Abstraction over the outbound notification transport.
///
/// Implementations are invoked at most once per submission attempt and never
/// concurrently for the same session.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Delivers `record`. Any `Err` is reported to the user as a failed
    /// submission that may be retried.
    async fn send(&self, record: &ProjectRecord) -> Result<()>;
}

#[async_trait]
impl<S: NotificationSender + ?Sized> NotificationSender for Arc<S> {
    async fn send(&self, record: &ProjectRecord) -> Result<()> {
        (**self).send(record).await
    }
}

#[async_trait]
impl<S: NotificationSender + ?Sized> NotificationSender for Box<S> {
    async fn send(&self, record: &ProjectRecord) -> Result<()> {
        (**self).send(record).await
    }
}
