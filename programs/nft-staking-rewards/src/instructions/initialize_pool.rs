use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{REWARD_VAULT_SEED, STAKE_POOL_SEED};
use crate::events::PoolInitialized;
use crate::state::StakePool;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    pub reward_token_mint: InterfaceAccount<'info, Mint>,

    // init on the fixed seed is the one-time guard: a second initialize
    // fails because the pool account already exists
    #[account(
        init,
        payer = admin,
        space = 8 + StakePool::INIT_SPACE,
        seeds = [STAKE_POOL_SEED],
        bump,
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        init,
        payer = admin,
        token::mint = reward_token_mint,
        token::authority = stake_pool,
        token::token_program = token_program,
        seeds = [REWARD_VAULT_SEED],
        bump,
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        reward_rate_per_second: u64,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        self.stake_pool.set_inner(StakePool {
            admin: self.admin.key(),
            reward_token_mint: self.reward_token_mint.key(),
            reward_rate_per_second,
            total_staked: 0,
            bump: bumps.stake_pool,
        });

        emit!(PoolInitialized {
            admin: self.admin.key(),
            reward_token_mint: self.reward_token_mint.key(),
            reward_rate_per_second,
        });

        msg!(
            "Stake pool initialized with reward rate: {} tokens/second",
            reward_rate_per_second
        );

        Ok(())
    }
}
