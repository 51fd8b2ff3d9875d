//! 淨算與需求傳遞的性質測試

use proptest::prelude::*;
use rust_decimal::Decimal;

use mrp_calc::{DemandPropagator, NettingCalculator};
use mrp_core::{ItemParams, PeriodSeries};

const HORIZON: usize = 10;

fn series_strategy() -> impl Strategy<Value = PeriodSeries> {
    proptest::collection::vec(0i64..500, HORIZON).prop_map(|v| PeriodSeries::from_ints(&v))
}

fn params_strategy() -> impl Strategy<Value = ItemParams> {
    (0u32..6, 1i64..120, 0i64..100).prop_map(|(lead_time, lot_size, on_hand)| {
        ItemParams::new("PROP-001", lead_time, Decimal::from(lot_size))
            .with_initial_on_hand(Decimal::from(on_hand))
    })
}

proptest! {
    #[test]
    fn netting_is_idempotent(
        gross in series_strategy(),
        receipts in series_strategy(),
        params in params_strategy(),
    ) {
        let first = NettingCalculator::calculate(&gross, Some(&receipts), &params).unwrap();
        let second = NettingCalculator::calculate(&gross, Some(&receipts), &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn net_requirements_and_receipts_never_negative(
        gross in series_strategy(),
        params in params_strategy(),
    ) {
        let plan = NettingCalculator::calculate(&gross, None, &params).unwrap();
        for t in 0..HORIZON {
            prop_assert!(plan.net_requirements.get(t) >= Decimal::ZERO);
            prop_assert!(plan.planned_order_receipts.get(t) >= Decimal::ZERO);
        }
    }

    #[test]
    fn planned_receipts_are_lot_multiples(
        gross in series_strategy(),
        params in params_strategy(),
    ) {
        let plan = NettingCalculator::calculate(&gross, None, &params).unwrap();
        for t in 0..HORIZON {
            prop_assert_eq!(
                plan.planned_order_receipts.get(t) % params.lot_size,
                Decimal::ZERO
            );
        }
    }

    #[test]
    fn release_matches_receipt_offset_by_lead_time(
        gross in series_strategy(),
        params in params_strategy(),
    ) {
        let plan = NettingCalculator::calculate(&gross, None, &params).unwrap();
        let lead_time = params.lead_time as usize;
        for t in 0..HORIZON {
            if t + lead_time < HORIZON {
                prop_assert_eq!(
                    plan.planned_order_releases.get(t),
                    plan.planned_order_receipts.get(t + lead_time)
                );
            } else {
                // 收貨期會落在時界之外的下達不存在
                prop_assert_eq!(plan.planned_order_releases.get(t), Decimal::ZERO);
            }
        }
    }

    #[test]
    fn on_hand_conservation(
        gross in series_strategy(),
        receipts in series_strategy(),
        params in params_strategy(),
    ) {
        let plan = NettingCalculator::calculate(&gross, Some(&receipts), &params).unwrap();
        let mut previous = params.initial_on_hand;
        for t in 0..HORIZON {
            let expected = previous
                + plan.scheduled_receipts.get(t)
                + plan.planned_order_receipts.get(t)
                - plan.gross_requirements.get(t);
            prop_assert_eq!(plan.on_hand.get(t), expected);
            previous = plan.on_hand.get(t);
        }
    }

    #[test]
    fn shift_backward_zero_fills_beyond_source(
        series in series_strategy(),
        shift in 0u32..15,
        multiplier in 1i64..10,
    ) {
        let result =
            DemandPropagator::shift_backward(&series, shift, Decimal::from(multiplier), HORIZON);
        for i in 0..HORIZON {
            let source = i + shift as usize;
            if source < series.horizon() {
                prop_assert_eq!(result.get(i), series.get(source) * Decimal::from(multiplier));
            } else {
                prop_assert_eq!(result.get(i), Decimal::ZERO);
            }
        }
    }
}
