use anchor_lang::prelude::*;
use std::collections::BTreeSet;

use crate::constants::MAX_PAGE_LIMIT;
use crate::errors::LeverageError;
use crate::math::Dec;
use crate::state::Params;

impl Params {
    /// Check every field against its bound.
    ///
    /// Checks run in field order and the first violation is returned; nothing
    /// after it is inspected. Comparison failures carry the observed value and
    /// the bound in the error's compared values.
    pub fn validate(&self) -> Result<()> {
        self.validate_with_page_limit(MAX_PAGE_LIMIT)
    }

    /// Same as [`Params::validate`] with an explicit ceiling for `number_per_block`
    pub fn validate_with_page_limit(&self, page_limit: i64) -> Result<()> {
        let Some(leverage_max) = self.leverage_max else {
            return err!(LeverageError::LeverageMaxMissing);
        };
        require_gt!(leverage_max, Dec::one(), LeverageError::LeverageMaxTooLow);

        require_gt!(self.epoch_length, 0, LeverageError::EpochLengthNotPositive);

        let Some(pool_open_threshold) = self.pool_open_threshold else {
            return err!(LeverageError::PoolOpenThresholdMissing);
        };
        require_gt!(
            pool_open_threshold,
            Dec::zero(),
            LeverageError::PoolOpenThresholdNotPositive
        );

        let Some(safety_factor) = self.safety_factor else {
            return err!(LeverageError::SafetyFactorMissing);
        };
        require_gt!(safety_factor, Dec::zero(), LeverageError::SafetyFactorNotPositive);

        require_gte!(self.number_per_block, 0, LeverageError::NumberPerBlockNegative);
        require_gte!(
            page_limit,
            self.number_per_block,
            LeverageError::NumberPerBlockExceedsPageLimit
        );

        if let Some(pool_id) = first_duplicate(&self.enabled_pools) {
            msg!("Duplicate enabled pool id: {}", pool_id);
            return err!(LeverageError::DuplicateEnabledPool);
        }

        if self.exit_buffer.is_none() {
            return err!(LeverageError::ExitBufferMissing);
        }

        let Some(liabilities_factor) = self.liabilities_factor else {
            return err!(LeverageError::LiabilitiesFactorMissing);
        };
        require_gt!(
            liabilities_factor,
            Dec::zero(),
            LeverageError::LiabilitiesFactorNotPositive
        );
        require_gte!(
            Dec::one(),
            liabilities_factor,
            LeverageError::LiabilitiesFactorAboveOne
        );

        Ok(())
    }
}

/// First id seen twice while scanning in order
fn first_duplicate(pools: &[u64]) -> Option<u64> {
    let mut seen = BTreeSet::new();
    pools.iter().copied().find(|pool_id| !seen.insert(*pool_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use proptest::prelude::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    fn assert_rejects(params: &Params, expected: LeverageError) {
        let err = params.validate().unwrap_err();
        assert_eq!(err, Error::from(expected));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Params::new().validate().is_ok());
    }

    #[test]
    fn test_distinct_pools_accepted() {
        let params = Params {
            enabled_pools: vec![1, 2, 3],
            ..Params::new()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_duplicate_pools_rejected() {
        let params = Params {
            enabled_pools: vec![1, 2, 1],
            ..Params::new()
        };
        assert_rejects(&params, LeverageError::DuplicateEnabledPool);
    }

    #[test]
    fn test_first_duplicate_in_scan_order() {
        assert_eq!(first_duplicate(&[]), None);
        assert_eq!(first_duplicate(&[4, 5, 6]), None);
        assert_eq!(first_duplicate(&[3, 9, 9, 3]), Some(9));
        assert_eq!(first_duplicate(&[3, 9, 3, 9]), Some(3));
    }

    #[test]
    fn test_leverage_max_missing() {
        let params = Params {
            leverage_max: None,
            ..Params::new()
        };
        assert_rejects(&params, LeverageError::LeverageMaxMissing);
    }

    #[test]
    fn test_leverage_max_of_one_rejected() {
        let params = Params {
            leverage_max: Some(Dec::one()),
            ..Params::new()
        };
        assert_rejects(&params, LeverageError::LeverageMaxTooLow);
    }

    #[test]
    fn test_leverage_max_just_above_one_accepted() {
        let params = Params {
            leverage_max: Some(dec("1.000000000000000001")),
            ..Params::new()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_epoch_length_zero_rejected() {
        let params = Params {
            epoch_length: 0,
            ..Params::new()
        };
        assert_rejects(&params, LeverageError::EpochLengthNotPositive);
    }

    #[test]
    fn test_pool_open_threshold() {
        let missing = Params {
            pool_open_threshold: None,
            ..Params::new()
        };
        assert_rejects(&missing, LeverageError::PoolOpenThresholdMissing);

        let zero = Params {
            pool_open_threshold: Some(Dec::zero()),
            ..Params::new()
        };
        assert_rejects(&zero, LeverageError::PoolOpenThresholdNotPositive);
    }

    #[test]
    fn test_safety_factor() {
        let missing = Params {
            safety_factor: None,
            ..Params::new()
        };
        assert_rejects(&missing, LeverageError::SafetyFactorMissing);

        let negative = Params {
            safety_factor: Some(dec("-1.1")),
            ..Params::new()
        };
        assert_rejects(&negative, LeverageError::SafetyFactorNotPositive);
    }

    #[test]
    fn test_number_per_block_bounds() {
        let negative = Params {
            number_per_block: -1,
            ..Params::new()
        };
        assert_rejects(&negative, LeverageError::NumberPerBlockNegative);

        let over = Params {
            number_per_block: MAX_PAGE_LIMIT + 1,
            ..Params::new()
        };
        assert_rejects(&over, LeverageError::NumberPerBlockExceedsPageLimit);

        let at_limit = Params {
            number_per_block: MAX_PAGE_LIMIT,
            ..Params::new()
        };
        assert!(at_limit.validate().is_ok());

        let zero = Params {
            number_per_block: 0,
            ..Params::new()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_number_per_block_with_explicit_page_limit() {
        let params = Params {
            number_per_block: 10_000,
            ..Params::new()
        };
        let err = params.validate_with_page_limit(9999).unwrap_err();
        assert_eq!(err, Error::from(LeverageError::NumberPerBlockExceedsPageLimit));
        assert!(params.validate_with_page_limit(10_000).is_ok());
    }

    #[test]
    fn test_exit_buffer_missing() {
        let params = Params {
            exit_buffer: None,
            ..Params::new()
        };
        assert_rejects(&params, LeverageError::ExitBufferMissing);
    }

    #[test]
    fn test_exit_buffer_zero_accepted() {
        let params = Params {
            exit_buffer: Some(Dec::zero()),
            ..Params::new()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_liabilities_factor() {
        let missing = Params {
            liabilities_factor: None,
            ..Params::new()
        };
        assert_rejects(&missing, LeverageError::LiabilitiesFactorMissing);

        let zero = Params {
            liabilities_factor: Some(Dec::zero()),
            ..Params::new()
        };
        assert_rejects(&zero, LeverageError::LiabilitiesFactorNotPositive);

        let one = Params {
            liabilities_factor: Some(dec("1.0")),
            ..Params::new()
        };
        assert!(one.validate().is_ok());

        let above = Params {
            liabilities_factor: Some(dec("1.0000001")),
            ..Params::new()
        };
        assert_rejects(&above, LeverageError::LiabilitiesFactorAboveOne);
    }

    #[test]
    fn test_first_violation_wins() {
        let params = Params {
            leverage_max: None,
            epoch_length: -5,
            safety_factor: None,
            enabled_pools: vec![2, 2],
            liabilities_factor: Some(Dec::from_int(3)),
            ..Params::new()
        };
        assert_rejects(&params, LeverageError::LeverageMaxMissing);

        let params = Params {
            leverage_max: Some(Dec::from_int(5)),
            ..params
        };
        assert_rejects(&params, LeverageError::EpochLengthNotPositive);
    }

    #[test]
    fn test_compared_values_reported() {
        let params = Params {
            leverage_max: Some(dec("0.5")),
            ..Params::new()
        };
        match params.validate().unwrap_err() {
            Error::AnchorError(err) => {
                assert_eq!(err.error_name, "LeverageMaxTooLow");
                assert!(err.compared_values.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn dec_strategy(raw: std::ops::RangeInclusive<i128>) -> impl Strategy<Value = Dec> {
        raw.prop_map(Dec::from_raw)
    }

    proptest! {
        #[test]
        fn prop_leverage_max_at_most_one_rejected(
            leverage_max in dec_strategy(-1_000_000_000_000_000_000_000..=1_000_000_000_000_000_000)
        ) {
            let params = Params { leverage_max: Some(leverage_max), ..Params::new() };
            prop_assert_eq!(params.validate().unwrap_err(), Error::from(LeverageError::LeverageMaxTooLow));
        }

        #[test]
        fn prop_non_positive_epoch_rejected(epoch_length in i64::MIN..=0) {
            let params = Params { epoch_length, ..Params::new() };
            prop_assert_eq!(params.validate().unwrap_err(), Error::from(LeverageError::EpochLengthNotPositive));
        }

        #[test]
        fn prop_non_positive_ratios_rejected(
            value in dec_strategy(-1_000_000_000_000_000_000_000..=0),
            field in 0usize..3
        ) {
            let (params, expected) = match field {
                0 => (
                    Params { pool_open_threshold: Some(value), ..Params::new() },
                    LeverageError::PoolOpenThresholdNotPositive,
                ),
                1 => (
                    Params { safety_factor: Some(value), ..Params::new() },
                    LeverageError::SafetyFactorNotPositive,
                ),
                _ => (
                    Params { liabilities_factor: Some(value), ..Params::new() },
                    LeverageError::LiabilitiesFactorNotPositive,
                ),
            };
            prop_assert_eq!(params.validate().unwrap_err(), Error::from(expected));
        }

        #[test]
        fn prop_liabilities_factor_above_one_rejected(
            liabilities_factor in dec_strategy(1_000_000_000_000_000_001..=i128::MAX)
        ) {
            let params = Params { liabilities_factor: Some(liabilities_factor), ..Params::new() };
            prop_assert_eq!(params.validate().unwrap_err(), Error::from(LeverageError::LiabilitiesFactorAboveOne));
        }

        #[test]
        fn prop_number_per_block_out_of_range_rejected(
            number_per_block in prop_oneof![i64::MIN..0, (MAX_PAGE_LIMIT + 1)..=i64::MAX]
        ) {
            let params = Params { number_per_block, ..Params::new() };
            prop_assert!(params.validate().is_err());
        }

        #[test]
        fn prop_repeated_pool_rejected(
            distinct in proptest::collection::btree_set(any::<u64>(), 1..32),
            pick in any::<prop::sample::Index>(),
            insert_at in any::<prop::sample::Index>()
        ) {
            let mut pools: Vec<u64> = distinct.into_iter().collect();
            let repeated = pools[pick.index(pools.len())];
            let position = insert_at.index(pools.len() + 1);
            pools.insert(position, repeated);
            let params = Params { enabled_pools: pools, ..Params::new() };
            prop_assert_eq!(params.validate().unwrap_err(), Error::from(LeverageError::DuplicateEnabledPool));
        }

        #[test]
        fn prop_distinct_pools_accepted(
            pools in proptest::collection::btree_set(any::<u64>(), 0..64)
        ) {
            let params = Params { enabled_pools: pools.into_iter().collect(), ..Params::new() };
            prop_assert!(params.validate().is_ok());
        }

        #[test]
        fn prop_validation_is_idempotent(
            leverage_max in dec_strategy(0..=20_000_000_000_000_000_000),
            number_per_block in -10i64..20_000,
            pools in proptest::collection::vec(0u64..16, 0..8)
        ) {
            let params = Params {
                leverage_max: Some(leverage_max),
                number_per_block,
                enabled_pools: pools,
                ..Params::new()
            };
            prop_assert_eq!(params.validate(), params.validate());
        }
    }
}
