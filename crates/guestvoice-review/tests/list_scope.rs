//! Hotel-scoped read side through the authed handlers.

mod common;

use axum::extract::{Query, State};
use axum::{Extension, Json};
use std::sync::Arc;

use guestvoice_review::handler::{self, HotelScopeQuery};
use guestvoice_types::Error;
use guestvoice_types::auth::{Auth, Role};
use guestvoice_types::store_adapter::{
	BatchStatus, EmailBatch, EmailEntry, EntryStatus, StoreAdapter,
};
use guestvoice_types::types::{HotelId, now};

use common::{MemoryStore, RecordingMailer, admin, staff, test_app};

fn scope(hotel_id: Option<i64>) -> Query<HotelScopeQuery> {
	Query(HotelScopeQuery { hotel_id: hotel_id.map(HotelId) })
}

async fn seed_batch(store: &MemoryStore, hotel_id: i64, entries: Vec<EmailEntry>) -> EmailBatch {
	store.create_email_batch(HotelId(hotel_id), entries).await.unwrap()
}

#[tokio::test]
async fn test_staff_sees_only_own_hotel_newest_first() {
	let store = Arc::new(
		MemoryStore::default()
			.with_hotel(1, "Grand Plaza", None)
			.with_hotel(2, "Seaside Inn", None)
			.with_review(1, "Alice", 5)
			.with_review(2, "Bob", 3)
			.with_review(1, "Carol", 4),
	);
	let mailer = Arc::new(RecordingMailer::default());
	let (app, _rx) = test_app(store, mailer);

	// An explicit filter for another hotel is ignored for staff
	let Json(res) =
		handler::get_reviews(State(app), Extension(staff(1)), scope(Some(2))).await.unwrap();

	let names: Vec<&str> = res.reviews.iter().map(|r| &*r.guest_name).collect();
	assert_eq!(names, ["Carol", "Alice"]);
}

#[tokio::test]
async fn test_admin_review_listing_needs_a_hotel() {
	let store = Arc::new(
		MemoryStore::default().with_hotel(1, "Grand Plaza", None).with_review(1, "Alice", 5),
	);
	let mailer = Arc::new(RecordingMailer::default());
	let (app, _rx) = test_app(store, mailer);

	let res = handler::get_reviews(State(app.clone()), Extension(admin()), scope(None)).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let Json(res) =
		handler::get_reviews(State(app), Extension(admin()), scope(Some(1))).await.unwrap();
	assert_eq!(res.reviews.len(), 1);
}

#[tokio::test]
async fn test_reads_are_idempotent() {
	let store = Arc::new(
		MemoryStore::default().with_hotel(1, "Grand Plaza", None).with_review(1, "Alice", 5),
	);
	let mailer = Arc::new(RecordingMailer::default());
	let (app, _rx) = test_app(store.clone(), mailer);

	let Json(first) =
		handler::get_reviews(State(app.clone()), Extension(staff(1)), scope(None))
			.await
			.unwrap();
	let Json(second) =
		handler::get_reviews(State(app), Extension(staff(1)), scope(None)).await.unwrap();

	assert_eq!(first.reviews.len(), second.reviews.len());
	assert_eq!(first.reviews[0].id, second.reviews[0].id);
	assert_eq!(store.reviews.lock().len(), 1);
}

#[tokio::test]
async fn test_batch_summaries_carry_per_status_counts() {
	let store = Arc::new(MemoryStore::default().with_hotel(1, "Grand Plaza", None));
	let entries = vec![
		EmailEntry {
			email: "a@x.com".into(),
			status: EntryStatus::Sent,
			sent_at: Some(now()),
			error: None,
		},
		EmailEntry {
			email: "b@x.com".into(),
			status: EntryStatus::Failed,
			sent_at: None,
			error: Some("boom".into()),
		},
		EmailEntry {
			email: "c@x.com".into(),
			status: EntryStatus::Sent,
			sent_at: Some(now()),
			error: None,
		},
	];
	let mut batch = seed_batch(&store, 1, entries).await;
	batch.status = BatchStatus::Failed;
	store.update_email_batch(&batch).await.unwrap();

	let mailer = Arc::new(RecordingMailer::default());
	let (app, _rx) = test_app(store, mailer);

	let Json(batches) =
		handler::get_email_batches(State(app), Extension(staff(1)), scope(None))
			.await
			.unwrap();

	assert_eq!(batches.len(), 1);
	assert_eq!(batches[0].email_count, 3);
	assert_eq!(batches[0].sent_count, 2);
	assert_eq!(batches[0].failed_count, 1);
}

#[tokio::test]
async fn test_admin_lists_batches_across_hotels() {
	let store = Arc::new(
		MemoryStore::default()
			.with_hotel(1, "Grand Plaza", None)
			.with_hotel(2, "Seaside Inn", None),
	);
	seed_batch(&store, 1, vec![EmailEntry::pending("a@x.com")]).await;
	seed_batch(&store, 2, vec![EmailEntry::pending("b@x.com")]).await;

	let mailer = Arc::new(RecordingMailer::default());
	let (app, _rx) = test_app(store, mailer);

	// No filter lists every hotel, newest first
	let Json(all) =
		handler::get_email_batches(State(app.clone()), Extension(admin()), scope(None))
			.await
			.unwrap();
	assert_eq!(all.len(), 2);
	assert_eq!(all[0].batch.hotel_id, HotelId(2));

	// With a filter only that hotel shows up
	let Json(one) =
		handler::get_email_batches(State(app.clone()), Extension(admin()), scope(Some(1)))
			.await
			.unwrap();
	assert_eq!(one.len(), 1);
	assert_eq!(one[0].batch.hotel_id, HotelId(1));

	// Staff are pinned to their assignment
	let Json(scoped) =
		handler::get_email_batches(State(app), Extension(staff(2)), scope(Some(1)))
			.await
			.unwrap();
	assert_eq!(scoped.len(), 1);
	assert_eq!(scoped[0].batch.hotel_id, HotelId(2));
}

#[tokio::test]
async fn test_staff_without_assignment_rejected() {
	let store = Arc::new(MemoryStore::default());
	let mailer = Arc::new(RecordingMailer::default());
	let (app, _rx) = test_app(store, mailer);

	let unassigned = Auth { user_id: 7, role: Role::Staff, hotel_id: None };

	let res = handler::get_reviews(
		State(app.clone()),
		Extension(unassigned.clone()),
		scope(None),
	)
	.await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let res =
		handler::get_email_batches(State(app), Extension(unassigned), scope(None)).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));
}

// vim: ts=4
