use anchor_lang::prelude::*;

use crate::error::StakeError;

/// Global pool config, created once at ["stake_pool"]. The admin and the
/// reward rate are fixed at initialization.
#[account]
#[derive(InitSpace)]
pub struct StakePool {
    pub admin: Pubkey,
    pub reward_token_mint: Pubkey,
    /// base reward units accrued per second, before the type multiplier
    pub reward_rate_per_second: u64,
    /// number of stake records currently active
    pub total_staked: u64,
    pub bump: u8,
}

impl StakePool {
    pub fn increment_staked(&mut self) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(1)
            .ok_or(StakeError::ArithmeticOverflow)?;
        Ok(())
    }

    /// A decrement below zero means the counter and the record set have
    /// diverged, so it surfaces as a fatal error instead of wrapping.
    pub fn decrement_staked(&mut self) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(1)
            .ok_or(StakeError::InvariantViolation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(total_staked: u64) -> StakePool {
        StakePool {
            admin: Pubkey::default(),
            reward_token_mint: Pubkey::default(),
            reward_rate_per_second: 100,
            total_staked,
            bump: 255,
        }
    }

    #[test]
    fn counter_tracks_stake_and_unstake() {
        let mut p = pool(0);
        p.increment_staked().unwrap();
        p.increment_staked().unwrap();
        assert_eq!(p.total_staked, 2);
        p.decrement_staked().unwrap();
        assert_eq!(p.total_staked, 1);
    }

    #[test]
    fn decrement_below_zero_fails() {
        let mut p = pool(0);
        assert!(p.decrement_staked().is_err());
        assert_eq!(p.total_staked, 0);
    }
}
