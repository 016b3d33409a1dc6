use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::{REWARD_VAULT_SEED, STAKE_POOL_SEED, STAKE_RECORD_SEED};
use crate::error::StakeError;
use crate::events::RewardsClaimed;
use crate::instructions::shared::transfer_tokens;
use crate::state::{StakePool, StakeRecord};
use crate::utils::{calculate_reward, elapsed_seconds};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        seeds = [STAKE_POOL_SEED],
        bump = stake_pool.bump,
        has_one = reward_token_mint,
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, stake_record.nft_mint.as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.owner == staker.key() @ StakeError::Unauthorized,
    )]
    pub stake_record: Account<'info, StakeRecord>,

    pub reward_token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED],
        bump,
        constraint = reward_vault.mint == reward_token_mint.key(),
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = staker,
        associated_token::mint = reward_token_mint,
        associated_token::authority = staker,
        associated_token::token_program = token_program,
    )]
    pub staker_reward_ata: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimRewards<'info> {
    pub fn claim_rewards(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let elapsed = elapsed_seconds(self.stake_record.last_claim_timestamp, now)?;
        let reward = calculate_reward(
            elapsed,
            self.stake_pool.reward_rate_per_second,
            self.stake_record.multiplier_bps,
        )?;

        if reward > 0 {
            // either the full reward is paid and the clock advances, or
            // nothing changes
            require!(
                self.reward_vault.amount >= reward,
                StakeError::InsufficientVaultFunds
            );

            let pool_seeds: &[&[u8]] = &[STAKE_POOL_SEED, &[self.stake_pool.bump]];
            transfer_tokens(
                &self.reward_vault,
                &self.staker_reward_ata,
                reward,
                &self.reward_token_mint,
                &self.stake_pool.to_account_info(),
                &self.token_program,
                Some(pool_seeds),
            )?;
        }

        // a zero reward still settles: the checkpoint moves to now
        self.stake_record.last_claim_timestamp = now;

        emit!(RewardsClaimed {
            owner: self.staker.key(),
            nft_mint: self.stake_record.nft_mint,
            amount: reward,
        });

        msg!("Rewards claimed: {}", reward);

        Ok(())
    }
}
