#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("B6fjKKwLEwWNUJ6JiSPSwLVJSz6ZjtCVi4gjqxbQYT7d");

#[program]
pub mod nft_staking_rewards {

    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        reward_rate_per_second: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_pool(reward_rate_per_second, &ctx.bumps)
    }

    pub fn register_nft_type(
        ctx: Context<RegisterNftType>,
        name: String,
        multiplier_bps: u64,
    ) -> Result<()> {
        ctx.accounts.register_nft_type(name, multiplier_bps, &ctx.bumps)
    }

    pub fn stake_nft(ctx: Context<StakeNft>) -> Result<()> {
        ctx.accounts.stake_nft(&ctx.bumps)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        ctx.accounts.claim_rewards()
    }

    pub fn unstake_nft(ctx: Context<UnstakeNft>) -> Result<()> {
        ctx.accounts.unstake_nft()
    }
}
