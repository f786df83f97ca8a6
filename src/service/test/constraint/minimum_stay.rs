use super::*;

/// Tests a stay shorter than the applicable rule requires.
///
/// A 2-night stay inside a 3-night-minimum window must report both the
/// requirement and the actual night count.
///
/// Expected: Ok(Some((3, 2)))
#[tokio::test]
async fn reports_violation_when_stay_too_short() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::minimum_stay_rule::create_minimum_stay_rule(
        db,
        date(2025, 12, 20),
        date(2026, 1, 5),
        3,
    )
    .await?;

    let violation = ConstraintService::new(db)
        .minimum_stay_violation(date(2025, 12, 22), date(2025, 12, 24))
        .await?;

    assert_eq!(violation, Some((3, 2)));

    Ok(())
}

/// Tests a stay that exactly meets the minimum.
///
/// Expected: Ok(None)
#[tokio::test]
async fn passes_when_stay_meets_minimum() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::minimum_stay_rule::create_minimum_stay_rule(
        db,
        date(2025, 12, 20),
        date(2026, 1, 5),
        3,
    )
    .await?;

    let violation = ConstraintService::new(db)
        .minimum_stay_violation(date(2025, 12, 22), date(2025, 12, 25))
        .await?;

    assert_eq!(violation, None);

    Ok(())
}

/// Tests that a rule only partially overlapping the stay does not apply.
///
/// The stay starts inside the rule window but checks out after it, so the
/// window does not fully contain the stay.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_partially_overlapping_rules() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::minimum_stay_rule::create_minimum_stay_rule(
        db,
        date(2025, 12, 1),
        date(2025, 12, 4),
        5,
    )
    .await?;

    let violation = ConstraintService::new(db)
        .minimum_stay_violation(date(2025, 12, 3), date(2025, 12, 5))
        .await?;

    assert_eq!(violation, None);

    Ok(())
}

/// Tests that the strictest of several applicable rules binds.
///
/// Expected: Ok(Some) with the largest min_nights
#[tokio::test]
async fn strictest_rule_wins_when_several_apply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::minimum_stay_rule::create_minimum_stay_rule(
        db,
        date(2025, 12, 1),
        date(2025, 12, 31),
        2,
    )
    .await?;
    factory::minimum_stay_rule::create_minimum_stay_rule(
        db,
        date(2025, 12, 10),
        date(2025, 12, 20),
        5,
    )
    .await?;

    let violation = ConstraintService::new(db)
        .minimum_stay_violation(date(2025, 12, 12), date(2025, 12, 15))
        .await?;

    assert_eq!(violation, Some((5, 3)));

    Ok(())
}
