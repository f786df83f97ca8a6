use super::*;

/// Tests confirming a pending booking.
///
/// Expected: Ok with CONFIRMED status and the hold expiry cleared
#[tokio::test]
async fn confirms_pending_booking_and_clears_hold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking =
        factory::booking::create_booking(db, "Deluxe Room", date(2025, 12, 1), date(2025, 12, 5), 1)
            .await?;
    assert!(booking.hold_expiry.is_some());

    let confirmed = BookingService::new(db)
        .confirm(&booking.id.to_string())
        .await
        .unwrap();

    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(confirmed.hold_expiry.is_none());

    Ok(())
}

/// Tests that only pending bookings can be confirmed.
///
/// Expected: Err(InvalidState) for confirmed and cancelled bookings
#[tokio::test]
async fn rejects_confirming_non_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let confirmed = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .status(BookingStatus::Confirmed)
        .hold_expiry(None)
        .build()
        .await?;
    let cancelled = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .status(BookingStatus::Cancelled)
        .hold_expiry(None)
        .build()
        .await?;

    let service = BookingService::new(db);
    assert!(matches!(
        service.confirm(&confirmed.id.to_string()).await,
        Err(AppError::BookingErr(BookingError::InvalidState(_)))
    ));
    assert!(matches!(
        service.confirm(&cancelled.id.to_string()).await,
        Err(AppError::BookingErr(BookingError::InvalidState(_)))
    ));

    Ok(())
}
