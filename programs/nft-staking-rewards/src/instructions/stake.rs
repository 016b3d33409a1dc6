use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{Metadata, MetadataAccount},
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::constants::{NFT_TYPE_SEED, NFT_VAULT_SEED, STAKE_POOL_SEED, STAKE_RECORD_SEED};
use crate::error::StakeError;
use crate::events::NftStaked;
use crate::instructions::shared::transfer_tokens;
use crate::state::{NftType, StakePool, StakeRecord};

#[derive(Accounts)]
pub struct StakeNft<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    pub nft_mint: InterfaceAccount<'info, Mint>,

    pub collection_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [STAKE_POOL_SEED],
        bump = stake_pool.bump,
    )]
    pub stake_pool: Account<'info, StakePool>,

    #[account(
        seeds = [NFT_TYPE_SEED, collection_mint.key().as_ref(), nft_type.name.as_bytes()],
        bump = nft_type.bump,
        constraint = nft_type.collection == collection_mint.key() @ StakeError::InvalidAssetType,
    )]
    pub nft_type: Account<'info, NftType>,

    // the NFT must be a verified member of the type's collection
    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            nft_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
        constraint = metadata.collection.is_some() @ StakeError::InvalidAssetType,
        constraint = metadata.collection.as_ref().unwrap().key == collection_mint.key() @ StakeError::InvalidAssetType,
        constraint = metadata.collection.as_ref().unwrap().verified @ StakeError::InvalidAssetType,
    )]
    pub metadata: Account<'info, MetadataAccount>,

    #[account(
        mut,
        associated_token::mint = nft_mint,
        associated_token::authority = staker,
        associated_token::token_program = token_program,
        constraint = staker_nft_ata.amount == 1 @ StakeError::CustodyTransferFailed,
    )]
    pub staker_nft_ata: InterfaceAccount<'info, TokenAccount>,

    // record seeded by the mint alone: staking an already-staked NFT fails
    // here before any transfer, whoever the second staker is
    #[account(
        init,
        payer = staker,
        space = 8 + StakeRecord::INIT_SPACE,
        seeds = [STAKE_RECORD_SEED, nft_mint.key().as_ref()],
        bump,
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        init,
        payer = staker,
        token::mint = nft_mint,
        token::authority = stake_record,
        token::token_program = token_program,
        seeds = [NFT_VAULT_SEED, nft_mint.key().as_ref()],
        bump,
    )]
    pub nft_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub metadata_program: Program<'info, Metadata>,
}

impl<'info> StakeNft<'info> {
    pub fn stake_nft(&mut self, bumps: &StakeNftBumps) -> Result<()> {
        require!(self.nft_type.multiplier_bps > 0, StakeError::InvalidMultiplier);

        // custody first: if the transfer cannot complete the whole
        // transaction aborts and no record survives
        transfer_tokens(
            &self.staker_nft_ata,
            &self.nft_vault,
            1,
            &self.nft_mint,
            &self.staker.to_account_info(),
            &self.token_program,
            None,
        )?;

        let now = Clock::get()?.unix_timestamp;

        self.stake_record.set_inner(StakeRecord {
            owner: self.staker.key(),
            nft_mint: self.nft_mint.key(),
            nft_type: self.nft_type.key(),
            stake_timestamp: now,
            last_claim_timestamp: now,
            multiplier_bps: self.nft_type.multiplier_bps,
            bump: bumps.stake_record,
        });

        self.stake_pool.increment_staked()?;

        emit!(NftStaked {
            owner: self.staker.key(),
            nft_mint: self.nft_mint.key(),
            multiplier_bps: self.nft_type.multiplier_bps,
            total_staked: self.stake_pool.total_staked,
        });

        msg!(
            "NFT staked: {} with multiplier {} bps",
            self.nft_mint.key(),
            self.nft_type.multiplier_bps
        );

        Ok(())
    }
}
