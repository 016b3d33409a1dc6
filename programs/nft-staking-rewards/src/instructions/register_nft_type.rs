use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::constants::{NFT_TYPE_SEED, STAKE_POOL_SEED};
use crate::error::StakeError;
use crate::state::{NftType, StakePool};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct RegisterNftType<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [STAKE_POOL_SEED],
        bump = stake_pool.bump,
        has_one = admin @ StakeError::Unauthorized,
    )]
    pub stake_pool: Account<'info, StakePool>,

    pub collection_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = 8 + NftType::INIT_SPACE,
        seeds = [NFT_TYPE_SEED, collection_mint.key().as_ref(), name.as_bytes()],
        bump,
    )]
    pub nft_type: Account<'info, NftType>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterNftType<'info> {
    pub fn register_nft_type(
        &mut self,
        name: String,
        multiplier_bps: u64,
        bumps: &RegisterNftTypeBumps,
    ) -> Result<()> {
        require!(multiplier_bps > 0, StakeError::InvalidMultiplier);

        self.nft_type.set_inner(NftType {
            collection: self.collection_mint.key(),
            name,
            multiplier_bps,
            bump: bumps.nft_type,
        });

        msg!(
            "NFT type registered for collection {} with multiplier {} bps",
            self.collection_mint.key(),
            multiplier_bps
        );

        Ok(())
    }
}
