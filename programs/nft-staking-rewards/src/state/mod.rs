pub mod nft_type;
pub mod stake_pool;
pub mod stake_record;

pub use nft_type::*;
pub use stake_pool::*;
pub use stake_record::*;
