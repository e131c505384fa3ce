//! Fixture conformance tests
//!
//! Every fixture under `fixtures/receipts` must score its recorded points,
//! and the score must equal the sum of the rules applied one at a time.

use testresult::TestResult;

use tally::{
    calculate_points,
    fixtures::ReceiptFixture,
    points::{
        PointsBreakdown, afternoon_points, description_points, item_pair_points, odd_day_points,
        quarter_total_points, retailer_points, round_total_points,
    },
};

#[test]
fn fixtures_score_expected_points() -> TestResult {
    let fixtures = ReceiptFixture::all()?;

    assert!(!fixtures.is_empty(), "expected at least one receipt fixture");

    for (name, fixture) in fixtures {
        let receipt = fixture.parsed_receipt()?;

        assert_eq!(
            calculate_points(&receipt),
            fixture.points,
            "fixture {name} scored unexpected points"
        );
    }

    Ok(())
}

#[test]
fn score_is_sum_of_independent_rules() -> TestResult {
    for (name, fixture) in ReceiptFixture::all()? {
        let receipt = fixture.parsed_receipt()?;

        let independent = retailer_points(receipt.retailer())
            + round_total_points(receipt.total())
            + quarter_total_points(receipt.total())
            + item_pair_points(receipt.items().len())
            + receipt.items().iter().map(description_points).sum::<u64>()
            + odd_day_points(receipt.purchase_date())
            + afternoon_points(receipt.purchase_time());

        assert_eq!(
            calculate_points(&receipt),
            independent,
            "fixture {name} is not the sum of its parts"
        );
        assert_eq!(
            PointsBreakdown::from_receipt(&receipt).total(),
            independent,
            "fixture {name} breakdown disagrees with the independent rules"
        );
    }

    Ok(())
}

#[test]
fn corner_market_breakdown() -> TestResult {
    let receipt = ReceiptFixture::load("corner-market")?.parsed_receipt()?;

    assert_eq!(
        PointsBreakdown::from_receipt(&receipt),
        PointsBreakdown {
            retailer: 14,
            round_total: 50,
            quarter_total: 25,
            item_pairs: 10,
            descriptions: 0,
            odd_day: 0,
            afternoon: 10,
        }
    );

    Ok(())
}

#[test]
fn scoring_is_deterministic() -> TestResult {
    let receipt = ReceiptFixture::load("target")?.parsed_receipt()?;

    let first = calculate_points(&receipt);

    for _ in 0..10 {
        assert_eq!(calculate_points(&receipt), first, "score changed between runs");
    }

    Ok(())
}
