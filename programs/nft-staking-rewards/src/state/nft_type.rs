use anchor_lang::prelude::*;

use crate::constants::MAX_TYPE_NAME_LEN;

/// Admin-registered NFT type at ["nft_type", collection_mint, name].
/// Resolves a collection member to its staking multiplier.
#[account]
#[derive(InitSpace)]
pub struct NftType {
    /// verified collection this type belongs to
    pub collection: Pubkey,
    #[max_len(MAX_TYPE_NAME_LEN)]
    pub name: String,
    /// reward multiplier in basis points (10000 = 1.0x), always > 0
    pub multiplier_bps: u64,
    pub bump: u8,
}
