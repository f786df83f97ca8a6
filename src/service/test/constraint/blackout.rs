use super::*;

/// Tests that a blackout on the check-out date blocks the stay.
///
/// The blackout check is inclusive on both ends of the stay, unlike the
/// half-open night arithmetic used for availability.
///
/// Expected: Ok with the touched blackout date
#[tokio::test]
async fn includes_blackout_on_checkout_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blackout_date::create_blackout_date(db, date(2025, 12, 26), "Private event").await?;

    let touched = ConstraintService::new(db)
        .blackout_dates_within(date(2025, 12, 23), date(2025, 12, 26))
        .await?;

    assert_eq!(touched, vec![date(2025, 12, 26)]);

    Ok(())
}

/// Tests a stay that steers clear of all blackout dates.
///
/// Expected: Ok with no dates
#[tokio::test]
async fn clear_when_stay_avoids_blackouts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blackout_date::create_blackout_date(db, date(2025, 12, 27), "Private event").await?;

    let touched = ConstraintService::new(db)
        .blackout_dates_within(date(2025, 12, 23), date(2025, 12, 26))
        .await?;

    assert!(touched.is_empty());

    Ok(())
}

/// Tests that all touched blackout dates come back, in date order.
///
/// Expected: Ok with every blackout inside the stay, sorted
#[tokio::test]
async fn returns_all_touched_dates_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::blackout_date::create_blackout_date(db, date(2025, 12, 25), "Christmas").await?;
    factory::blackout_date::create_blackout_date(db, date(2025, 12, 24), "Christmas Eve").await?;
    factory::blackout_date::create_blackout_date(db, date(2025, 12, 31), "New Year's Eve").await?;

    let touched = ConstraintService::new(db)
        .blackout_dates_within(date(2025, 12, 24), date(2025, 12, 26))
        .await?;

    assert_eq!(touched, vec![date(2025, 12, 24), date(2025, 12, 25)]);

    Ok(())
}
