use anchor_lang::prelude::*;

use crate::errors::BountyError;
use crate::events::BountyCancelled;
use crate::state::{Bounty, BountyState, BOUNTY_SEED};

#[derive(Accounts)]
#[instruction(question_id: String)]
pub struct CancelBounty<'info> {
    /// The original asker; must sign and receives the refund
    #[account(mut)]
    pub asker: Signer<'info>,

    /// Escrow account to settle. Closing to the asker returns the full
    /// held balance (bounty amount plus rent reserve).
    #[account(
        mut,
        close = asker,
        has_one = asker @ BountyError::Unauthorized,
        seeds = [BOUNTY_SEED, question_id.as_bytes()],
        bump = bounty.bump,
    )]
    pub bounty: Account<'info, Bounty>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CancelBounty>, question_id: String) -> Result<()> {
    let bounty = &mut ctx.accounts.bounty;
    require!(bounty.state == BountyState::Open, BountyError::BountyNotOpen);
    require_keys_eq!(
        bounty.asker,
        ctx.accounts.asker.key(),
        BountyError::Unauthorized
    );

    bounty.state = BountyState::Cancelled;

    emit!(BountyCancelled {
        bounty: bounty.key(),
        asker: ctx.accounts.asker.key(),
        amount: bounty.amount,
    });
    msg!("Bounty for {} cancelled, funds returned, account closed", question_id);
    Ok(())
}
