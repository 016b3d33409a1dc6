use anchor_lang::prelude::*;

/// One record per staked NFT at ["stake_record", nft_mint]. Seeding by the
/// mint alone keeps at most one active record per NFT, whoever stakes it;
/// the owner stored here gates every claim and unstake.
#[account]
#[derive(InitSpace)]
pub struct StakeRecord {
    /// who staked the NFT
    pub owner: Pubkey,
    /// mint of the staked NFT
    pub nft_mint: Pubkey,
    /// the NftType captured at stake time
    pub nft_type: Pubkey,
    /// when the NFT was staked
    pub stake_timestamp: i64,
    /// last reward settlement; advanced by claim, never decreases
    pub last_claim_timestamp: i64,
    /// multiplier in basis points, copied from the type at stake time so a
    /// later type change cannot alter an active record
    pub multiplier_bps: u64,
    pub bump: u8,
}
