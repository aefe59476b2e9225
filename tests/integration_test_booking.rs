mod common;

use booking_platform::{
    domain::{
        models::{
            booking::{Booking, BookingStatus, NewBookingParams},
            service::{NewServiceParams, Service, ServiceStatus, MAX_DURATION_MIN},
        },
        services::{booking_service::BookingService, service_catalog::ServiceCatalog},
    },
    error::AppError,
};
use common::{date, price, seed_booking, seed_client, seed_company, seed_service, TestApp};
use uuid::Uuid;

#[tokio::test]
async fn test_end_time_is_derived_from_service_duration() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    let massage = seed_service(&uow, owner, company.id, "Massage", "60.00", 45).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;

    let booking = seed_booking(&uow, massage.id, client.id, "2024-03-01", "10:00").await;
    uow.save_changes().await.unwrap();

    assert_eq!(booking.start_time.to_string(), "10:00:00");
    assert_eq!(booking.end_time.to_string(), "10:45:00");
    assert_eq!(booking.status, BookingStatus::Pending);

    let uow = app.uow().await;
    let stored = BookingService::new(&uow).find_by_id(booking.id, owner).await.unwrap();
    assert_eq!(stored.end_time.to_string(), "10:45:00");
    assert_eq!(stored.client_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(stored.service_name.as_deref(), Some("Massage"));
}

#[tokio::test]
async fn test_unknown_service_is_rejected_without_persisting() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    seed_service(&uow, owner, company.id, "Massage", "60.00", 45).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let booking = Booking::new(NewBookingParams {
        service_id: Uuid::new_v4(),
        client_id: client.id,
        booking_date: date("2024-03-01"),
        start_time: "10:00".parse().unwrap(),
        status: BookingStatus::Pending,
    });
    let result = BookingService::new(&uow).add(booking).await;
    assert!(matches!(result, Err(AppError::InvalidReference(_))));
    drop(uow);

    let uow = app.uow().await;
    assert!(BookingService::new(&uow).list(owner).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_recomputes_end_time_after_duration_change() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    let service = seed_service(&uow, owner, company.id, "Cut", "25.00", 30).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    let booking = seed_booking(&uow, service.id, client.id, "2024-03-01", "09:00").await;
    assert_eq!(booking.end_time.to_string(), "09:30:00");

    let mut longer = service.clone();
    longer.duration_min = 90;
    ServiceCatalog::new(&uow).update(longer, owner).await.unwrap();

    // Stored end time is not touched by the service edit itself.
    let untouched = BookingService::new(&uow).find_by_id(booking.id, owner).await.unwrap();
    assert_eq!(untouched.end_time.to_string(), "09:30:00");

    let mut moved = untouched.clone();
    moved.start_time = "14:15".parse().unwrap();
    moved.status = BookingStatus::Confirmed;
    let updated = BookingService::new(&uow).update(moved).await.unwrap();
    uow.save_changes().await.unwrap();

    assert_eq!(updated.start_time.to_string(), "14:15:00");
    assert_eq!(updated.end_time.to_string(), "15:45:00");
    assert_eq!(updated.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_end_time_past_midnight_is_preserved() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "nightclub").await;
    let service = seed_service(&uow, owner, company.id, "Late Session", "40.00", 60).await;
    let client = seed_client(&uow, "Grace", "Hopper", "grace@example.com").await;
    let booking = seed_booking(&uow, service.id, client.id, "2024-03-01", "23:30").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let stored = BookingService::new(&uow).find_by_id(booking.id, owner).await.unwrap();
    assert_eq!(stored.end_time.to_string(), "24:30:00");
}

#[tokio::test]
async fn test_update_of_missing_booking_is_not_found() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    let service = seed_service(&uow, owner, company.id, "Cut", "25.00", 30).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;

    let phantom = Booking::new(NewBookingParams {
        service_id: service.id,
        client_id: client.id,
        booking_date: date("2024-03-01"),
        start_time: "10:00".parse().unwrap(),
        status: BookingStatus::Pending,
    });
    let result = BookingService::new(&uow).update(phantom).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_bookings_are_isolated_per_owner() {
    let app = TestApp::new().await;
    let owner_a = Uuid::new_v4();
    let owner_b = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner_a, "salon-a").await;
    let service = seed_service(&uow, owner_a, company.id, "Cut", "25.00", 30).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    let booking = seed_booking(&uow, service.id, client.id, "2024-03-01", "10:00").await;
    seed_company(&uow, owner_b, "salon-b").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let bookings = BookingService::new(&uow);
    assert!(bookings.list(owner_b).await.unwrap().is_empty());
    assert!(matches!(bookings.find_by_id(booking.id, owner_b).await, Err(AppError::NotFound(_))));
    assert!(!bookings.exists(booking.id, owner_b).await.unwrap());
    assert!(matches!(bookings.remove(booking.id, owner_b).await, Err(AppError::NotFound(_))));
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let bookings = BookingService::new(&uow);
    assert!(bookings.exists(booking.id, owner_a).await.unwrap());
    let removed = bookings.remove(booking.id, owner_a).await.unwrap();
    assert_eq!(removed.id, booking.id);
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    assert!(BookingService::new(&uow).list(owner_a).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bookings_are_listed_by_date_time_and_client() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    let service = seed_service(&uow, owner, company.id, "Cut", "25.00", 30).await;
    let zoe = seed_client(&uow, "Zoe", "Adams", "zoe@example.com").await;
    let ben = seed_client(&uow, "Ben", "Carter", "ben@example.com").await;

    seed_booking(&uow, service.id, zoe.id, "2024-03-02", "09:00").await;
    seed_booking(&uow, service.id, zoe.id, "2024-03-01", "11:00").await;
    seed_booking(&uow, service.id, zoe.id, "2024-03-01", "10:00").await;
    seed_booking(&uow, service.id, ben.id, "2024-03-01", "10:00").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let listed: Vec<(String, String, String)> = BookingService::new(&uow).list(owner).await.unwrap()
        .into_iter()
        .map(|b| (b.booking_date.to_string(), b.start_time.to_string(), b.client_name.unwrap_or_default()))
        .collect();

    assert_eq!(listed, vec![
        ("2024-03-01".to_string(), "10:00:00".to_string(), "Ben Carter".to_string()),
        ("2024-03-01".to_string(), "10:00:00".to_string(), "Zoe Adams".to_string()),
        ("2024-03-01".to_string(), "11:00:00".to_string(), "Zoe Adams".to_string()),
        ("2024-03-02".to_string(), "09:00:00".to_string(), "Zoe Adams".to_string()),
    ]);
}

#[tokio::test]
async fn test_find_by_id_is_stable_across_calls() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    let service = seed_service(&uow, owner, company.id, "Cut", "25.00", 30).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    let booking = seed_booking(&uow, service.id, client.id, "2024-03-01", "10:00").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let bookings = BookingService::new(&uow);
    let first = bookings.find_by_id(booking.id, owner).await.unwrap();
    let second = bookings.find_by_id(booking.id, owner).await.unwrap();
    assert_eq!(first, second);

    let catalog = ServiceCatalog::new(&uow);
    let first = catalog.find_by_id(service.id, owner).await.unwrap();
    let second = catalog.find_by_id(service.id, owner).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_out_of_range_end_time_is_rejected() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "salon").await;
    let too_long = Service::new(NewServiceParams {
        company_id: company.id,
        service_name: "Retreat".into(),
        description: String::new(),
        price: price("100.00"),
        duration_min: MAX_DURATION_MIN + 1,
        status: ServiceStatus::Active,
    });
    assert!(matches!(ServiceCatalog::new(&uow).add(too_long, owner).await, Err(AppError::Validation(_))));

    let service = seed_service(&uow, owner, company.id, "Cut", "25.00", 45).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    uow.save_changes().await.unwrap();

    // 596523:00 is the last whole hour an offset can hold; 45 more minutes overflow.
    let uow = app.uow().await;
    let booking = Booking::new(NewBookingParams {
        service_id: service.id,
        client_id: client.id,
        booking_date: date("2024-03-01"),
        start_time: "596523:00".parse().unwrap(),
        status: BookingStatus::Pending,
    });
    let result = BookingService::new(&uow).add(booking).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    drop(uow);

    let uow = app.uow().await;
    assert!(BookingService::new(&uow).list(owner).await.unwrap().is_empty());
}
