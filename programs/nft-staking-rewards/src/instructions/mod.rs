pub mod claim;
pub mod initialize_pool;
pub mod register_nft_type;
pub mod shared;
pub mod stake;
pub mod unstake;

pub use claim::*;
pub use initialize_pool::*;
pub use register_nft_type::*;
pub use stake::*;
pub use unstake::*;
