use std::fs;

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use solana_sdk::{
    account::AccountSharedData,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::Transaction,
};

use nft_staking_rewards::state::StakePool;

fn program_bytes() -> Option<Vec<u8>> {
    let program_name = env!("CARGO_PKG_NAME").replace('-', "_");
    for path in [
        format!("target/deploy/{}.so", program_name),
        format!("../../target/deploy/{}.so", program_name),
    ] {
        if let Ok(bytes) = fs::read(&path) {
            return Some(bytes);
        }
    }
    None
}

fn anchor_discriminator(ix_name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", ix_name);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

#[tokio::test]
async fn test_initialize_pool() {
    let mut svm = LiteSVM::new();
    let program_id: Pubkey = "B6fjKKwLEwWNUJ6JiSPSwLVJSz6ZjtCVi4gjqxbQYT7d"
        .parse()
        .unwrap();

    let Some(bytes) = program_bytes() else {
        eprintln!("skipping test_initialize_pool: program artifact not found, run `anchor build` first");
        return;
    };
    svm.add_program(program_id, &bytes);

    let admin = Keypair::new();
    let admin_account = AccountSharedData::new(10_000_000_000, 0, &system_program::id());
    svm.set_account(admin.pubkey(), admin_account.into()).unwrap();

    // create the reward token mint
    let reward_mint = Keypair::new();
    let mint_rent = svm.minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN);
    let create_mint_ix = system_instruction::create_account(
        &admin.pubkey(),
        &reward_mint.pubkey(),
        mint_rent,
        spl_token::state::Mint::LEN as u64,
        &spl_token::id(),
    );
    let init_mint_ix = spl_token::instruction::initialize_mint2(
        &spl_token::id(),
        &reward_mint.pubkey(),
        &admin.pubkey(),
        None,
        9,
    )
    .unwrap();

    let (stake_pool, _) = Pubkey::find_program_address(&[b"stake_pool"], &program_id);
    let (reward_vault, _) = Pubkey::find_program_address(&[b"reward_vault"], &program_id);

    let reward_rate_per_second: u64 = 100;
    let mut data = anchor_discriminator("initialize_pool").to_vec();
    data.extend_from_slice(&reward_rate_per_second.to_le_bytes());

    let initialize_pool_ix = Instruction::new_with_bytes(
        program_id,
        &data,
        vec![
            AccountMeta::new(admin.pubkey(), true),
            AccountMeta::new_readonly(reward_mint.pubkey(), false),
            AccountMeta::new(stake_pool, false),
            AccountMeta::new(reward_vault, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
    );

    let transaction = Transaction::new_signed_with_payer(
        &[create_mint_ix, init_mint_ix, initialize_pool_ix],
        Some(&admin.pubkey()),
        &[&admin, &reward_mint],
        svm.latest_blockhash(),
    );

    let result = svm.send_transaction(transaction);
    assert!(result.is_ok(), "Transaction failed: {:?}", result.err());

    let pool_account = svm.get_account(&stake_pool).expect("pool account missing");
    assert_eq!(pool_account.owner, program_id);

    let pool = StakePool::try_deserialize(&mut pool_account.data.as_slice()).unwrap();
    assert_eq!(pool.admin, admin.pubkey());
    assert_eq!(pool.reward_token_mint, reward_mint.pubkey());
    assert_eq!(pool.reward_rate_per_second, reward_rate_per_second);
    assert_eq!(pool.total_staked, 0);

    let vault_account = svm.get_account(&reward_vault).expect("reward vault missing");
    assert_eq!(vault_account.owner, spl_token::id());
}
