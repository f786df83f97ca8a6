use super::*;

/// Tests the happy path of booking creation.
///
/// Expected: Ok with PENDING status, a hold expiry about seven days out,
/// and a `BK{yymmdd}-XXXX` code
#[tokio::test]
async fn creates_pending_booking_with_hold_and_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;

    let booking = BookingService::new(db)
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 1),
            date(2025, 12, 5),
            2,
        ))
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(booking.hold_expiry.is_some());
    assert!(booking.code.starts_with("BK"));
    assert_eq!(booking.code.len(), 13);
    assert_eq!(booking.code.as_bytes()[8], b'-');
    assert!(booking.amendment_logs.is_empty());
    assert!(booking.cancelled_at.is_none());

    Ok(())
}

/// Tests creation rejected for insufficient availability, and that the
/// rejection leaves nothing behind.
///
/// 15 of 20 rooms are held, so requesting 6 must fail and report the 5
/// that remain.
///
/// Expected: Err(InsufficientAvailability) and no new row
#[tokio::test]
async fn rejects_when_not_enough_rooms_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    factory::booking::create_booking(db, "Deluxe Room", date(2025, 12, 1), date(2025, 12, 5), 15)
        .await?;

    let result = BookingService::new(db)
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 2),
            date(2025, 12, 4),
            6,
        ))
        .await;

    match result {
        Err(AppError::BookingErr(BookingError::InsufficientAvailability {
            available,
            requested,
        })) => {
            assert_eq!(available, 5);
            assert_eq!(requested, 6);
        }
        other => panic!("expected InsufficientAvailability, got {:?}", other),
    }

    let count = entity::prelude::Booking::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that requesting exactly the remaining inventory succeeds.
///
/// Expected: Ok
#[tokio::test]
async fn allows_booking_exactly_the_remaining_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    factory::booking::create_booking(db, "Deluxe Room", date(2025, 12, 1), date(2025, 12, 5), 15)
        .await?;

    let booking = BookingService::new(db)
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 1),
            date(2025, 12, 5),
            5,
        ))
        .await
        .unwrap();

    assert_eq!(booking.number_of_rooms, 5);

    Ok(())
}

/// Tests creation across a blackout date.
///
/// Expected: Err(BlackoutViolation) naming the touched dates
#[tokio::test]
async fn rejects_stay_touching_blackout_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    factory::blackout_date::create_blackout_date(db, date(2025, 12, 25), "Christmas gala").await?;

    let result = BookingService::new(db)
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 23),
            date(2025, 12, 26),
            1,
        ))
        .await;

    match result {
        Err(AppError::BookingErr(BookingError::BlackoutViolation { dates })) => {
            assert_eq!(dates, vec![date(2025, 12, 25)]);
        }
        other => panic!("expected BlackoutViolation, got {:?}", other),
    }

    Ok(())
}

/// Tests creation shorter than a binding minimum-stay rule.
///
/// Expected: Err(MinimumStayViolation) with required and actual nights
#[tokio::test]
async fn rejects_stay_below_minimum_nights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    factory::minimum_stay_rule::create_minimum_stay_rule(
        db,
        date(2025, 12, 20),
        date(2026, 1, 5),
        3,
    )
    .await?;

    let result = BookingService::new(db)
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 22),
            date(2025, 12, 24),
            1,
        ))
        .await;

    match result {
        Err(AppError::BookingErr(BookingError::MinimumStayViolation { required, actual })) => {
            assert_eq!(required, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected MinimumStayViolation, got {:?}", other),
    }

    Ok(())
}

/// Tests input validation: inverted dates, non-positive room count,
/// negative rate, and blank required fields.
///
/// Expected: Err(Validation) for each
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room_type::create_room_type(db, "Deluxe Room", 20).await?;
    let service = BookingService::new(db);

    let inverted = service
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 5),
            date(2025, 12, 1),
            1,
        ))
        .await;
    assert!(matches!(
        inverted,
        Err(AppError::BookingErr(BookingError::Validation(_)))
    ));

    let zero_rooms = service
        .create(create_dto(
            "Deluxe Room",
            date(2025, 12, 1),
            date(2025, 12, 5),
            0,
        ))
        .await;
    assert!(matches!(
        zero_rooms,
        Err(AppError::BookingErr(BookingError::Validation(_)))
    ));

    let mut negative_rate = create_dto("Deluxe Room", date(2025, 12, 1), date(2025, 12, 5), 1);
    negative_rate.rate = -100.0;
    assert!(matches!(
        service.create(negative_rate).await,
        Err(AppError::BookingErr(BookingError::Validation(_)))
    ));

    let mut blank_name = create_dto("Deluxe Room", date(2025, 12, 1), date(2025, 12, 5), 1);
    blank_name.customer_name = "  ".to_string();
    assert!(matches!(
        service.create(blank_name).await,
        Err(AppError::BookingErr(BookingError::Validation(_)))
    ));

    Ok(())
}

/// Tests creation against an unknown room type.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_room_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .create(create_dto(
            "Penthouse",
            date(2025, 12, 1),
            date(2025, 12, 5),
            1,
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFound(_)))
    ));

    Ok(())
}
