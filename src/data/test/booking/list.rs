use super::*;

/// Tests combining exact filters.
///
/// Expected: Ok with only bookings matching every criterion
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    factory::room_type::create_room_type(db, "Suite", 5).await?;
    factory::booking::BookingFactory::new(db, "Deluxe Room")
        .sale_owner("Nok")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, "Deluxe Room")
        .sale_owner("Ploy")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, "Suite")
        .sale_owner("Nok")
        .build()
        .await?;

    let (items, total) = BookingRepository::new(db)
        .list(
            &BookingFilter {
                room_type: Some("Deluxe Room".to_string()),
                sale_owner: Some("Nok".to_string()),
                ..Default::default()
            },
            1,
            50,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].room_type, "Deluxe Room");
    assert_eq!(items[0].sale_owner, "Nok");

    Ok(())
}

/// Tests the empty result shape for a filter matching nothing.
///
/// Expected: Ok with an empty page and zero total
#[tokio::test]
async fn returns_empty_page_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (items, total) = BookingRepository::new(db)
        .list(
            &BookingFilter {
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            },
            1,
            50,
        )
        .await?;

    assert!(items.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
