use anchor_lang::prelude::*;

use crate::errors::BountyError;
use crate::events::BountyAwarded;
use crate::state::{Bounty, BountyState, BOUNTY_SEED};

#[derive(Accounts)]
#[instruction(question_id: String)]
pub struct AwardBounty<'info> {
    /// The original asker; must sign to award
    #[account(mut)]
    pub asker: Signer<'info>,

    /// Wallet receiving the payout
    #[account(mut)]
    pub winner: SystemAccount<'info>,

    /// Escrow account to settle. Closing to the winner moves the full
    /// held balance (bounty amount plus rent reserve) in one payout.
    #[account(
        mut,
        close = winner,
        has_one = asker @ BountyError::Unauthorized,
        seeds = [BOUNTY_SEED, question_id.as_bytes()],
        bump = bounty.bump,
    )]
    pub bounty: Account<'info, Bounty>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AwardBounty>, question_id: String) -> Result<()> {
    let bounty = &mut ctx.accounts.bounty;
    require!(bounty.state == BountyState::Open, BountyError::BountyNotOpen);
    require_keys_eq!(
        bounty.asker,
        ctx.accounts.asker.key(),
        BountyError::Unauthorized
    );

    bounty.state = BountyState::Awarded;

    emit!(BountyAwarded {
        bounty: bounty.key(),
        winner: ctx.accounts.winner.key(),
        amount: bounty.amount,
    });
    msg!(
        "Bounty for {} awarded to {}, account closed",
        question_id,
        ctx.accounts.winner.key()
    );
    Ok(())
}
