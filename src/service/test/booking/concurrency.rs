use super::*;

/// Stress test for the create path's check-then-write atomicity.
///
/// Ten tasks race to book one suite each against an inventory of five.
/// Because the availability check and the insert share a transaction,
/// exactly five creations may succeed; the rest must be rejected for
/// insufficient availability, and the persisted holds must never exceed
/// the inventory.
///
/// Expected: exactly 5 successes and 5 held rooms
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_never_oversell() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Suite", 5).await?;

    let mut handles = Vec::new();
    for i in 0..10 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            let mut dto = create_dto("Suite", date(2025, 12, 1), date(2025, 12, 5), 1);
            dto.customer_name = format!("Racer {}", i);
            dto.email = format!("racer{}@example.com", i);
            BookingService::new(&db).create(dto).await
        }));
    }

    let mut successes = 0;
    let mut rejections = 0;
    for handle in handles {
        match handle.await.expect("task panicked") {
            Ok(_) => successes += 1,
            Err(AppError::BookingErr(BookingError::InsufficientAvailability { .. })) => {
                rejections += 1
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(successes, 5);
    assert_eq!(rejections, 5);

    let held: i64 = entity::prelude::Booking::find()
        .all(db)
        .await?
        .iter()
        .filter(|b| b.status.holds_inventory())
        .map(|b| i64::from(b.number_of_rooms))
        .sum();
    assert_eq!(held, 5);

    Ok(())
}
