//! Fire-and-forget staff notification queue.
//!
//! The submission handler pushes a job and returns; a consumer task owned
//! by the server drains the channel and performs the actual send. Failures
//! are logged and go nowhere else: notification is a convenience for
//! staff, never a correctness requirement of the submission.

use std::sync::Arc;

use guestvoice_types::mailer::ReviewMailer;
use guestvoice_types::store_adapter::Review;

use crate::prelude::*;

#[derive(Clone, Debug)]
pub struct ReviewNotification {
	pub hotel_id: HotelId,
	pub review: Review,
}

#[derive(Clone)]
pub struct NotifyQueue {
	tx: flume::Sender<ReviewNotification>,
}

impl NotifyQueue {
	pub fn new() -> (Self, flume::Receiver<ReviewNotification>) {
		let (tx, rx) = flume::unbounded();
		(Self { tx }, rx)
	}

	/// Queues a notification without blocking. A closed channel only
	/// happens during shutdown; the job is dropped with a log line.
	pub fn push(&self, notification: ReviewNotification) {
		if self.tx.send(notification).is_err() {
			warn!("Notification queue closed, dropping review notification");
		}
	}
}

/// Drains the queue until every sender is gone
pub fn spawn_consumer(
	rx: flume::Receiver<ReviewNotification>,
	mailer: Arc<dyn ReviewMailer>,
) -> tokio::task::JoinHandle<()> {
	tokio::spawn(async move {
		while let Ok(job) = rx.recv_async().await {
			let hotel_id = job.hotel_id;
			if let Err(err) = mailer.send_internal_notification(hotel_id, &job.review).await {
				error!("Failed to send review notification for hotel {}: {}", hotel_id, err);
			} else {
				info!("Review notification sent for hotel {}", hotel_id);
			}
		}
	})
}


// vim: ts=4
