// PDA seeds
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";
pub const STAKE_RECORD_SEED: &[u8] = b"stake_record";
pub const NFT_TYPE_SEED: &[u8] = b"nft_type";
pub const NFT_VAULT_SEED: &[u8] = b"nft_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

// multipliers are expressed in basis points, 10000 = 1.0x
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_TYPE_NAME_LEN: usize = 32;
