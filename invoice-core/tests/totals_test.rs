//! Derived-totals tests for invoice-core.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use invoice_core::models::{InvoiceTotals, SubTrip, TaxConfig};

fn trip(rate: Decimal, quantity: Decimal) -> SubTrip {
    SubTrip {
        description: "Trip".to_string(),
        rate,
        quantity,
        ..SubTrip::default()
    }
}

fn gst_9_9() -> TaxConfig {
    TaxConfig {
        use_igst: false,
        cgst_rate: dec!(9),
        sgst_rate: dec!(9),
        igst_rate: Decimal::ZERO,
    }
}

fn igst_18() -> TaxConfig {
    TaxConfig {
        use_igst: true,
        igst_rate: dec!(18),
        ..TaxConfig::default()
    }
}

#[test]
fn intra_state_end_to_end() {
    let trips = vec![trip(dec!(1000), dec!(2))];
    let totals = InvoiceTotals::compute(&trips, Decimal::ZERO, &gst_9_9());

    assert_eq!(totals.subtotal, dec!(2000));
    assert_eq!(totals.total_with_additional, dec!(2000));
    assert_eq!(totals.cgst_amount, dec!(180));
    assert_eq!(totals.sgst_amount, dec!(180));
    assert_eq!(totals.igst_amount, Decimal::ZERO);
    assert_eq!(totals.grand_total, dec!(2360));
}

#[test]
fn interstate_is_tax_neutral_for_equal_total_percentage() {
    let trips = vec![trip(dec!(1000), dec!(2))];
    let totals = InvoiceTotals::compute(&trips, Decimal::ZERO, &igst_18());

    assert_eq!(totals.igst_amount, dec!(360));
    assert_eq!(totals.cgst_amount, Decimal::ZERO);
    assert_eq!(totals.sgst_amount, Decimal::ZERO);
    assert_eq!(totals.grand_total, dec!(2360));
}

#[test]
fn additional_charges_are_taxed() {
    let trips = vec![trip(dec!(1000), dec!(1))];
    let totals = InvoiceTotals::compute(&trips, dec!(500), &igst_18());

    assert_eq!(totals.subtotal, dec!(1000));
    assert_eq!(totals.total_with_additional, dec!(1500));
    assert_eq!(totals.igst_amount, dec!(270));
    assert_eq!(totals.grand_total, dec!(1770));
}

#[test]
fn grand_total_identity_holds_across_input_combinations() {
    let trip_sets: [Vec<SubTrip>; 2] = [
        vec![],
        vec![trip(dec!(1250.50), dec!(2)), trip(dec!(980), dec!(3))],
    ];
    let charges = [Decimal::ZERO, dec!(750)];
    let taxes = [gst_9_9(), igst_18(), TaxConfig::default()];

    for trips in &trip_sets {
        for &additional in &charges {
            for tax in &taxes {
                let totals = InvoiceTotals::compute(trips, additional, tax);
                assert_eq!(
                    totals.grand_total,
                    totals.subtotal + totals.additional_charges + totals.total_tax,
                );
                assert_eq!(
                    totals.total_tax,
                    totals.cgst_amount + totals.sgst_amount + totals.igst_amount,
                );
            }
        }
    }
}

#[test]
fn empty_sub_trips_yield_zero_totals_not_an_error() {
    let totals = InvoiceTotals::compute(&[], Decimal::ZERO, &gst_9_9());
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.grand_total, Decimal::ZERO);
}

#[test]
fn totals_are_recomputed_not_cached() {
    let mut trips = vec![trip(dec!(1000), dec!(1))];
    let before = InvoiceTotals::compute(&trips, Decimal::ZERO, &gst_9_9());
    assert_eq!(before.subtotal, dec!(1000));

    trips[0].rate = dec!(2000);
    let after = InvoiceTotals::compute(&trips, Decimal::ZERO, &gst_9_9());
    assert_eq!(after.subtotal, dec!(2000));
    assert_eq!(after.grand_total, dec!(2360));
}

#[test]
fn flat_totals_carry_no_tax() {
    let totals = InvoiceTotals::flat(dec!(84000));
    assert_eq!(totals.subtotal, dec!(84000));
    assert_eq!(totals.total_tax, Decimal::ZERO);
    assert_eq!(totals.grand_total, dec!(84000));
}
