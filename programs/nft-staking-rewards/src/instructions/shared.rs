use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

/// Move tokens between accounts. Pass `signer_seeds` when the authority is
/// a PDA owned by this program, `None` when the holder signed the
/// transaction themselves.
pub fn transfer_tokens<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    authority: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: Option<&[&[u8]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        to: to.to_account_info(),
        mint: mint.to_account_info(),
        authority: authority.clone(),
    };

    match signer_seeds {
        Some(seeds) => {
            let signer = &[seeds];
            transfer_checked(
                CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
                amount,
                mint.decimals,
            )
        }
        None => transfer_checked(
            CpiContext::new(token_program.to_account_info(), cpi_accounts),
            amount,
            mint.decimals,
        ),
    }
}

/// Close an emptied token account and send its rent to `destination`.
pub fn close_token_account<'info>(
    account: &InterfaceAccount<'info, TokenAccount>,
    destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: Option<&[&[u8]]>,
) -> Result<()> {
    let cpi_accounts = CloseAccount {
        account: account.to_account_info(),
        destination: destination.clone(),
        authority: authority.clone(),
    };

    match signer_seeds {
        Some(seeds) => {
            let signer = &[seeds];
            close_account(CpiContext::new_with_signer(
                token_program.to_account_info(),
                cpi_accounts,
                signer,
            ))
        }
        None => close_account(CpiContext::new(
            token_program.to_account_info(),
            cpi_accounts,
        )),
    }
}
