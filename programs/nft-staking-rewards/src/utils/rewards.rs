use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::StakeError;

/// Seconds between the last settlement and `now`. A clock reading behind
/// the recorded checkpoint means the record is corrupt or the call is a
/// replay, so this fails instead of clamping to zero.
pub fn elapsed_seconds(last_claim_ts: i64, now_ts: i64) -> Result<u64> {
    if now_ts < last_claim_ts {
        return Err(StakeError::InvariantViolation.into());
    }
    Ok((now_ts - last_claim_ts) as u64)
}

/// Accrued reward for an elapsed interval:
/// floor(elapsed * rate * multiplier_bps / 10000).
/// Intermediates are u128 and every step is checked; the result must fit
/// back into u64.
pub fn calculate_reward(
    elapsed_seconds: u64,
    rate_per_second: u64,
    multiplier_bps: u64,
) -> Result<u64> {
    let base = (elapsed_seconds as u128)
        .checked_mul(rate_per_second as u128)
        .ok_or(StakeError::ArithmeticOverflow)?;

    let scaled = base
        .checked_mul(multiplier_bps as u128)
        .ok_or(StakeError::ArithmeticOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(StakeError::ArithmeticOverflow)?;

    u64::try_from(scaled).map_err(|_| error!(StakeError::ArithmeticOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_multiplier_scenario() {
        // rate = 100/sec, 2.0x multiplier, 10s elapsed
        assert_eq!(calculate_reward(10, 100, 20_000).unwrap(), 2_000);
    }

    #[test]
    fn fractional_multiplier_floors() {
        // rate = 100/sec, 1.5x multiplier, 7s elapsed
        assert_eq!(calculate_reward(7, 100, 15_000).unwrap(), 1_050);
    }

    #[test]
    fn zero_elapsed_pays_nothing() {
        assert_eq!(calculate_reward(0, 100, 20_000).unwrap(), 0);
    }

    #[test]
    fn zero_rate_pays_nothing() {
        assert_eq!(calculate_reward(3600, 0, 10_000).unwrap(), 0);
    }

    #[test]
    fn reward_is_monotonic_in_elapsed_time() {
        let mut previous = 0;
        for elapsed in [0, 1, 2, 7, 10, 60, 3_600, 86_400] {
            let reward = calculate_reward(elapsed, 100, 15_000).unwrap();
            assert!(reward >= previous);
            previous = reward;
        }
    }

    #[test]
    fn intermediate_overflow_is_rejected() {
        assert!(calculate_reward(u64::MAX, u64::MAX, 20_000).is_err());
    }

    #[test]
    fn result_wider_than_u64_is_rejected() {
        // the u128 math succeeds but the scaled result cannot narrow back
        assert!(calculate_reward(u64::MAX, 1, 20_000).is_err());
    }

    #[test]
    fn elapsed_is_difference_of_timestamps() {
        assert_eq!(elapsed_seconds(1_000, 1_010).unwrap(), 10);
        assert_eq!(elapsed_seconds(1_000, 1_000).unwrap(), 0);
    }

    #[test]
    fn clock_regression_fails_closed() {
        assert!(elapsed_seconds(1_000, 999).is_err());
    }
}
