use super::*;

/// Tests that an amendment appends exactly one audit entry recording every
/// changed field with its before and after values.
///
/// Expected: Ok with one entry, two field changes, and the amendment
/// stamps set
#[tokio::test]
async fn appends_one_entry_with_field_diffs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .customer_name("Old Name")
        .rate(2500.0)
        .build()
        .await?;

    let amended = BookingService::new(db)
        .amend(
            &booking.id.to_string(),
            AmendBookingDto {
                changes: BookingPatch {
                    customer_name: Some("New Name".to_string()),
                    rate: Some(3000.0),
                    ..Default::default()
                },
                amended_by: "Nok".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(amended.customer_name, "New Name");
    assert_eq!(amended.rate, 3000.0);
    assert_eq!(amended.last_amended_by.as_deref(), Some("Nok"));
    assert!(amended.last_amended_at.is_some());

    assert_eq!(amended.amendment_logs.len(), 1);
    let entry = &amended.amendment_logs[0];
    assert_eq!(entry.amended_by, "Nok");
    assert_eq!(entry.changes.len(), 2);

    let name_change = entry
        .changes
        .iter()
        .find(|c| c.field == "customerName")
        .unwrap();
    assert_eq!(name_change.before, serde_json::json!("Old Name"));
    assert_eq!(name_change.after, serde_json::json!("New Name"));

    let rate_change = entry.changes.iter().find(|c| c.field == "rate").unwrap();
    assert_eq!(rate_change.before, serde_json::json!(2500.0));
    assert_eq!(rate_change.after, serde_json::json!(3000.0));

    Ok(())
}

/// Tests that an amendment carrying only unchanged values writes nothing.
///
/// Expected: Ok with the booking untouched and no audit entry
#[tokio::test]
async fn noop_when_nothing_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .customer_name("Same Name")
        .build()
        .await?;

    let amended = BookingService::new(db)
        .amend(
            &booking.id.to_string(),
            AmendBookingDto {
                changes: BookingPatch {
                    customer_name: Some("Same Name".to_string()),
                    ..Default::default()
                },
                amended_by: "Nok".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(amended.amendment_logs.is_empty());
    assert!(amended.last_amended_at.is_none());
    assert!(amended.last_amended_by.is_none());

    Ok(())
}

/// Tests that successive amendments accumulate in order, oldest first.
///
/// Expected: Ok with two entries preserving their order
#[tokio::test]
async fn successive_amendments_accumulate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking = factory::booking::create_booking(
        db,
        "Deluxe Room",
        date(2025, 12, 1),
        date(2025, 12, 5),
        1,
    )
    .await?;

    let service = BookingService::new(db);
    service
        .amend(
            &booking.id.to_string(),
            AmendBookingDto {
                changes: BookingPatch {
                    rate: Some(2800.0),
                    ..Default::default()
                },
                amended_by: "Nok".to_string(),
            },
        )
        .await
        .unwrap();
    let amended = service
        .amend(
            &booking.id.to_string(),
            AmendBookingDto {
                changes: BookingPatch {
                    number_of_rooms: Some(2),
                    ..Default::default()
                },
                amended_by: "Ploy".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(amended.amendment_logs.len(), 2);
    assert_eq!(amended.amendment_logs[0].amended_by, "Nok");
    assert_eq!(amended.amendment_logs[0].changes[0].field, "rate");
    assert_eq!(amended.amendment_logs[1].amended_by, "Ploy");
    assert_eq!(amended.amendment_logs[1].changes[0].field, "numberOfRooms");
    assert_eq!(amended.last_amended_by.as_deref(), Some("Ploy"));

    Ok(())
}

/// Tests that terminal bookings cannot be amended.
///
/// Expected: Err(InvalidState)
#[tokio::test]
async fn rejects_amending_voided_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let booking = factory::booking::BookingFactory::new(db, "Deluxe Room")
        .status(BookingStatus::Void)
        .hold_expiry(None)
        .build()
        .await?;

    let result = BookingService::new(db)
        .amend(
            &booking.id.to_string(),
            AmendBookingDto {
                changes: BookingPatch {
                    rate: Some(2800.0),
                    ..Default::default()
                },
                amended_by: "Nok".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidState(_)))
    ));

    Ok(())
}

/// Tests that amendments growing the room count re-check availability,
/// and that the rejection leaves the audit trail untouched.
///
/// Expected: Err(InsufficientAvailability) with no new entry
#[tokio::test]
async fn rechecks_inventory_and_keeps_trail_on_rejection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Suite", 5).await?;
    factory::booking::create_booking(db, "Suite", date(2025, 12, 1), date(2025, 12, 5), 4).await?;
    let booking =
        factory::booking::create_booking(db, "Suite", date(2025, 12, 1), date(2025, 12, 5), 1)
            .await?;

    let service = BookingService::new(db);
    let result = service
        .amend(
            &booking.id.to_string(),
            AmendBookingDto {
                changes: BookingPatch {
                    number_of_rooms: Some(2),
                    ..Default::default()
                },
                amended_by: "Nok".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(
            BookingError::InsufficientAvailability { .. }
        ))
    ));

    let untouched = service.get(&booking.id.to_string()).await.unwrap();
    assert!(untouched.amendment_logs.is_empty());
    assert_eq!(untouched.number_of_rooms, 1);

    Ok(())
}
