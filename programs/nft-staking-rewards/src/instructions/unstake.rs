use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::{NFT_VAULT_SEED, REWARD_VAULT_SEED, STAKE_POOL_SEED, STAKE_RECORD_SEED};
use crate::error::StakeError;
use crate::events::NftUnstaked;
use crate::instructions::shared::{close_token_account, transfer_tokens};
use crate::state::{StakePool, StakeRecord};
use crate::utils::{calculate_reward, elapsed_seconds};

#[derive(Accounts)]
pub struct UnstakeNft<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    pub nft_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [STAKE_POOL_SEED],
        bump = stake_pool.bump,
        has_one = reward_token_mint,
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        mut,
        close = staker,
        seeds = [STAKE_RECORD_SEED, nft_mint.key().as_ref()],
        bump = stake_record.bump,
        has_one = nft_mint @ StakeError::NotStaked,
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

    #[account(
        mut,
        seeds = [NFT_VAULT_SEED, nft_mint.key().as_ref()],
        bump,
        constraint = nft_vault.mint == nft_mint.key(),
    )]
    pub nft_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = nft_mint,
        associated_token::authority = staker,
        associated_token::token_program = token_program,
    )]
    pub staker_nft_ata: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> UnstakeNft<'info> {
    pub fn unstake_nft(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let elapsed = elapsed_seconds(self.stake_record.last_claim_timestamp, now)?;
        let reward_due = calculate_reward(
            elapsed,
            self.stake_pool.reward_rate_per_second,
            self.stake_record.multiplier_bps,
        )?;

        // pay out what the vault can cover; an underfunded vault must not
        // hold the NFT hostage, so the settlement degrades to zero and the
        // shortfall is reported below
        let reward_paid = if reward_due > 0 && self.reward_vault.amount >= reward_due {
            let pool_seeds: &[&[u8]] = &[STAKE_POOL_SEED, &[self.stake_pool.bump]];
            transfer_tokens(
                &self.reward_vault,
                &self.staker_reward_ata,
                reward_due,
                &self.reward_token_mint,
                &self.stake_pool.to_account_info(),
                &self.token_program,
                Some(pool_seeds),
            )?;
            reward_due
        } else {
            if reward_due > 0 {
                msg!(
                    "reward vault balance {} below accrued reward {}, unstaking without payout",
                    self.reward_vault.amount,
                    reward_due
                );
            }
            0
        };

        // return custody; the stake record PDA owns the vault
        let nft_mint_key = self.nft_mint.key();
        let record_seeds: &[&[u8]] = &[
            STAKE_RECORD_SEED,
            nft_mint_key.as_ref(),
            &[self.stake_record.bump],
        ];

        transfer_tokens(
            &self.nft_vault,
            &self.staker_nft_ata,
            1,
            &self.nft_mint,
            &self.stake_record.to_account_info(),
            &self.token_program,
            Some(record_seeds),
        )?;

        close_token_account(
            &self.nft_vault,
            &self.staker.to_account_info(),
            &self.stake_record.to_account_info(),
            &self.token_program,
            Some(record_seeds),
        )?;

        self.stake_pool.decrement_staked()?;

        emit!(NftUnstaked {
            owner: self.staker.key(),
            nft_mint: nft_mint_key,
            reward_due,
            reward_paid,
            total_staked: self.stake_pool.total_staked,
        });

        msg!(
            "NFT unstaked: {}, rewards paid: {} of {}",
            nft_mint_key,
            reward_paid,
            reward_due
        );

        Ok(())
    }
}
