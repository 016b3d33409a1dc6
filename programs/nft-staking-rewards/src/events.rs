use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub admin: Pubkey,
    pub reward_token_mint: Pubkey,
    pub reward_rate_per_second: u64,
}

#[event]
pub struct NftStaked {
    pub owner: Pubkey,
    pub nft_mint: Pubkey,
    pub multiplier_bps: u64,
    pub total_staked: u64,
}

#[event]
pub struct RewardsClaimed {
    pub owner: Pubkey,
    pub nft_mint: Pubkey,
    pub amount: u64,
}

/// `reward_paid` is less than `reward_due` when the reward vault could not
/// cover the accrued amount and the unstake settled without a payout.
#[event]
pub struct NftUnstaked {
    pub owner: Pubkey,
    pub nft_mint: Pubkey,
    pub reward_due: u64,
    pub reward_paid: u64,
    pub total_staked: u64,
}
