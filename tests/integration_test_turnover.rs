mod common;

use booking_platform::domain::{
    models::booking::MonthlyRevenue,
    services::{booking_service::BookingService, service_catalog::ServiceCatalog},
};
use common::{price, seed_booking, seed_client, seed_company, seed_service, TestApp};
use uuid::Uuid;

fn month(label: &str, revenue: &str) -> MonthlyRevenue {
    MonthlyRevenue { month: label.to_string(), revenue: price(revenue) }
}

#[tokio::test]
async fn test_total_and_monthly_turnover() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "spa").await;
    let s1 = seed_service(&uow, owner, company.id, "Massage", "50.00", 60).await;
    let s2 = seed_service(&uow, owner, company.id, "Facial", "30.00", 30).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    seed_booking(&uow, s1.id, client.id, "2024-01-10", "10:00").await;
    seed_booking(&uow, s2.id, client.id, "2024-02-05", "11:00").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let bookings = BookingService::new(&uow);

    let total = bookings.calculate_total_turnover(owner, None).await.unwrap();
    assert_eq!(total, price("80.00"));
    assert_eq!(total.to_string(), "80.00");

    let monthly = bookings.calculate_monthly_turnover(owner, None).await.unwrap();
    assert_eq!(monthly, vec![month("Jan", "50.00"), month("Feb", "30.00")]);

    let filtered = bookings.calculate_total_turnover(owner, Some(s1.id)).await.unwrap();
    assert_eq!(filtered, price("50.00"));
    let filtered_monthly = bookings.calculate_monthly_turnover(owner, Some(s1.id)).await.unwrap();
    assert_eq!(filtered_monthly, vec![month("Jan", "50.00")]);
}

#[tokio::test]
async fn test_turnover_without_bookings_is_zero() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "spa").await;
    seed_service(&uow, owner, company.id, "Massage", "50.00", 60).await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let bookings = BookingService::new(&uow);
    assert_eq!(bookings.calculate_total_turnover(owner, None).await.unwrap(), price("0.00"));
    assert!(bookings.calculate_monthly_turnover(owner, None).await.unwrap().is_empty());
    assert_eq!(bookings.calculate_total_turnover(Uuid::new_v4(), None).await.unwrap(), price("0"));
}

#[tokio::test]
async fn test_monthly_turnover_merges_years() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "spa").await;
    let service = seed_service(&uow, owner, company.id, "Massage", "20.00", 60).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    seed_booking(&uow, service.id, client.id, "2023-03-15", "10:00").await;
    seed_booking(&uow, service.id, client.id, "2024-03-02", "10:00").await;
    seed_booking(&uow, service.id, client.id, "2024-12-24", "10:00").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let monthly = BookingService::new(&uow).calculate_monthly_turnover(owner, None).await.unwrap();
    assert_eq!(monthly, vec![month("Mar", "40.00"), month("Dec", "20.00")]);
}

#[tokio::test]
async fn test_turnover_follows_live_service_price() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();

    let uow = app.uow().await;
    let company = seed_company(&uow, owner, "spa").await;
    let service = seed_service(&uow, owner, company.id, "Massage", "50.00", 60).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    seed_booking(&uow, service.id, client.id, "2024-01-10", "10:00").await;
    seed_booking(&uow, service.id, client.id, "2024-01-11", "10:00").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let mut repriced = service.clone();
    repriced.price = price("12.50");
    ServiceCatalog::new(&uow).update(repriced, owner).await.unwrap();
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let total = BookingService::new(&uow).calculate_total_turnover(owner, None).await.unwrap();
    assert_eq!(total, price("25.00"));
}

#[tokio::test]
async fn test_turnover_excludes_other_owners() {
    let app = TestApp::new().await;
    let owner_a = Uuid::new_v4();
    let owner_b = Uuid::new_v4();

    let uow = app.uow().await;
    let company_a = seed_company(&uow, owner_a, "spa-a").await;
    let company_b = seed_company(&uow, owner_b, "spa-b").await;
    let service_a = seed_service(&uow, owner_a, company_a.id, "Massage", "50.00", 60).await;
    let service_b = seed_service(&uow, owner_b, company_b.id, "Massage", "70.00", 60).await;
    let client = seed_client(&uow, "Ada", "Lovelace", "ada@example.com").await;
    seed_booking(&uow, service_a.id, client.id, "2024-05-01", "10:00").await;
    seed_booking(&uow, service_b.id, client.id, "2024-05-01", "12:00").await;
    uow.save_changes().await.unwrap();

    let uow = app.uow().await;
    let bookings = BookingService::new(&uow);
    assert_eq!(bookings.calculate_total_turnover(owner_a, None).await.unwrap(), price("50.00"));
    assert_eq!(bookings.calculate_total_turnover(owner_b, None).await.unwrap(), price("70.00"));
    // Filtering on another owner's service yields nothing.
    assert_eq!(bookings.calculate_total_turnover(owner_a, Some(service_b.id)).await.unwrap(), price("0"));
}
