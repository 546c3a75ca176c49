mod helpers;

use helpers::setup::spawn_app;
use rendezvous_api::{
    account,
    availability::{self, SlotsFor},
    booking, execute_cancellable, provider, RendezvousError,
};
use rendezvous_api::booking::CreateBookingUseCase;
use rendezvous_domain::{BookingFilter, BookingStatus, UserType};
use std::time::Duration;

#[tokio::test]
async fn test_client_books_a_service() {
    let app = spawn_app().await;
    let session = account::login(&app.ctx, "marie@example.com".into(), UserType::Client)
        .await
        .expect("Expected to sign in");

    let slots = availability::get_available_slots(
        &app.ctx,
        SlotsFor::Service("s1".into()),
        "2026-01-05".into(),
    )
    .await
    .expect("Expected slots");
    let slot = slots
        .iter()
        .find(|t| t.to_string() == "10:00")
        .expect("Expected a 10:00 slot");

    let created = booking::create_booking(
        &app.ctx,
        session.user.id.clone(),
        "s1".into(),
        "2026-01-05".into(),
        slot.to_string(),
        Some("Première visite".into()),
    )
    .await
    .expect("Expected to create booking");
    assert_eq!(created.status, BookingStatus::Confirmed);
    assert_eq!(created.provider_id.as_str(), "p1");

    let bookings = booking::get_client_bookings(&app.ctx, session.user.id, BookingFilter::All)
        .await
        .expect("Expected client bookings");
    assert_eq!(bookings.bookings.len(), 4);
    assert!(bookings.bookings.iter().any(|b| b.id == created.id));
    assert_eq!(bookings.upcoming_count, 3);
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let app = spawn_app().await;
    let created = booking::create_booking(
        &app.ctx,
        "c2".into(),
        "s6".into(),
        "2025-11-10".into(),
        "09:00".into(),
        None,
    )
    .await
    .expect("Expected to create booking");

    let completed = booking::update_booking_status(
        &app.ctx,
        created.id.clone(),
        BookingStatus::Completed,
    )
    .await
    .expect("Expected provider to complete booking");
    assert_eq!(completed.status, BookingStatus::Completed);

    let reviewed = booking::review_booking(&app.ctx, created.id.clone(), 4, "Très utile".into())
        .await
        .expect("Expected to review booking");
    assert_eq!(reviewed.rating.map(|r| r.value()), Some(4));

    let stats = provider::get_provider_stats(&app.ctx, "p4".into())
        .await
        .expect("Expected stats");
    assert_eq!(stats.completed_bookings, 1);
    assert_eq!(stats.average_rating.to_string(), "4.0");

    let cancelled = booking::cancel_booking(&app.ctx, created.id.clone())
        .await
        .expect("Expected to cancel booking");
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    let stats = provider::get_provider_stats(&app.ctx, "p4".into())
        .await
        .expect("Expected stats");
    assert_eq!(stats.average_rating.to_string(), "N/A");
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = spawn_app().await;
    let res = booking::cancel_booking(&app.ctx, "b404".into()).await;
    assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    let res = booking::review_booking(&app.ctx, "b404".into(), 5, "".into()).await;
    assert!(matches!(res, Err(RendezvousError::NotFound(_))));
    let res =
        booking::update_booking_status(&app.ctx, "b404".into(), BookingStatus::Confirmed).await;
    assert!(matches!(res, Err(RendezvousError::NotFound(_))));
}

#[tokio::test]
async fn test_cancelled_booking_creation_is_discarded() {
    let mut app = spawn_app().await;
    app.ctx.config.booking_confirmation_delay = Duration::from_secs(30);

    let usecase = CreateBookingUseCase {
        client_id: "c1".into(),
        service_id: "s2".into(),
        date: "2026-01-06".into(),
        time: "11:30".into(),
        notes: None,
    };
    let (handle, fut) = execute_cancellable(usecase, &app.ctx);
    handle.abort();
    assert_eq!(fut.await, Err(RendezvousError::Cancelled));

    let app = app.restart().await;
    assert_eq!(app.ctx.repos.bookings.find_all().await.len(), 4);
}
