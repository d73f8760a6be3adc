#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::foundation::{SetId, Timestamp, WorkoutSessionId};
    use crate::domain::stats::totals::{compute_session_totals, SessionTotals};
    use crate::domain::workout::WorkoutSet;

    fn set(weight_kg: Option<f64>, reps: Option<u32>) -> WorkoutSet {
        WorkoutSet {
            id: SetId::new(1),
            session_id: WorkoutSessionId::new(1),
            exercise: "Chest Press Machine".to_string(),
            set_number: 1,
            weight_kg,
            reps,
            rpe: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        assert_eq!(compute_session_totals(&[]), SessionTotals::default());
        let totals = compute_session_totals(&[]);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.total_reps, 0);
        assert_eq!(totals.total_volume, 0.0);
    }

    #[test]
    fn test_two_sets_sum_reps_and_volume() {
        let totals = compute_session_totals(&[set(Some(10.0), Some(5)), set(Some(12.0), Some(3))]);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_reps, 8);
        assert_eq!(totals.total_volume, 86.0);
    }

    #[test]
    fn test_missing_values_count_as_zero() {
        let totals = compute_session_totals(&[set(None, Some(5)), set(Some(20.0), None)]);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_reps, 5);
        assert_eq!(totals.total_volume, 0.0);
    }

    #[test]
    fn test_volume_is_not_rounded() {
        let totals = compute_session_totals(&[set(Some(2.5), Some(3))]);
        assert_eq!(totals.total_volume, 7.5);
    }

    #[test]
    fn test_nan_weight_contaminates_volume() {
        let totals = compute_session_totals(&[set(Some(f64::NAN), Some(5)), set(Some(10.0), Some(5))]);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_reps, 10);
        assert!(totals.total_volume.is_nan());
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let json = serde_json::to_value(SessionTotals {
            count: 2,
            total_reps: 8,
            total_volume: 86.0,
        })
        .unwrap();
        assert_eq!(json["totalReps"], 8);
        assert_eq!(json["totalVolume"], 86.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn volume_equals_sum_of_weight_times_reps(
            raw in proptest::collection::vec((0_u32..4000, 0_u32..50), 0..30),
        ) {
            // Quarter-kilogram weights keep the float sums exact.
            let sets: Vec<WorkoutSet> = raw
                .iter()
                .map(|(quarters, reps)| set(Some(f64::from(*quarters) / 4.0), Some(*reps)))
                .collect();
            let expected_volume: f64 = raw
                .iter()
                .map(|(quarters, reps)| f64::from(*quarters) / 4.0 * f64::from(*reps))
                .sum();
            let expected_reps: u64 = raw.iter().map(|(_, reps)| u64::from(*reps)).sum();

            let totals = compute_session_totals(&sets);

            prop_assert_eq!(totals.count, raw.len() as u64);
            prop_assert_eq!(totals.total_reps, expected_reps);
            prop_assert_eq!(totals.total_volume, expected_volume);
        }
    }
}
