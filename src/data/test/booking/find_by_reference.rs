use super::*;

/// Tests that a numeric reference matches on the id column.
///
/// Expected: Ok(Some) with the booking of that id
#[tokio::test]
async fn matches_numeric_id() -> Result<(), DbErr> {
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

    let found = BookingRepository::new(db)
        .find_by_reference(&booking.id.to_string())
        .await?;

    assert_eq!(found.map(|b| b.id), Some(booking.id));

    Ok(())
}

/// Tests that a non-numeric reference matches on the code column.
///
/// Expected: Ok(Some) with the booking of that code
#[tokio::test]
async fn matches_booking_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .code("BK251201-ZZ99")
        .build()
        .await?;

    let found = BookingRepository::new(db)
        .find_by_reference("BK251201-ZZ99")
        .await?;

    assert_eq!(found.map(|b| b.id), Some(booking.id));

    Ok(())
}

/// Tests that an all-digit booking code still resolves through the code
/// column even though it parses as an integer.
///
/// Expected: Ok(Some) via the code match
#[tokio::test]
async fn numeric_looking_code_still_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .code("20251201")
        .build()
        .await?;

    let found = BookingRepository::new(db).find_by_reference("20251201").await?;

    assert_eq!(found.map(|b| b.id), Some(booking.id));

    Ok(())
}

/// Tests a reference matching nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = BookingRepository::new(db).find_by_reference("BK000000-NONE").await?;

    assert!(found.is_none());

    Ok(())
}
