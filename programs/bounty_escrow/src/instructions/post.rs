use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::errors::BountyError;
use crate::events::BountyPosted;
use crate::state::{Bounty, BountyState, BOUNTY_SEED, MAX_QUESTION_ID_LEN};

#[derive(Accounts)]
#[instruction(question_id: String)]
pub struct PostBounty<'info> {
    /// The asker posting the question; pays the bounty and the rent.
    /// The id length check must run before the bounty seeds derive from it.
    #[account(
        mut,
        constraint = question_id.as_bytes().len() <= MAX_QUESTION_ID_LEN @ BountyError::QuestionIdTooLong,
    )]
    pub asker: Signer<'info>,

    /// Escrow account holding the bounty, one per live question id
    #[account(
        init,
        payer = asker,
        space = 8 + Bounty::INIT_SPACE,
        seeds = [BOUNTY_SEED, question_id.as_bytes()],
        bump,
    )]
    pub bounty: Account<'info, Bounty>,

    pub system_program: Program<'info, System>,
}

impl<'info> PostBounty<'info> {
    /// Transfer the bounty lamports from the asker into the escrow
    pub fn deposit(&self, amount: u64) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.asker.to_account_info(),
                to: self.bounty.to_account_info(),
            },
        );
        transfer(cpi_ctx, amount)
    }

    /// Write the open bounty record
    pub fn init_bounty(
        &mut self,
        question_id: String,
        amount: u64,
        bumps: &PostBountyBumps,
    ) -> Result<()> {
        self.bounty.set_inner(Bounty {
            asker: self.asker.key(),
            amount,
            question_id,
            state: BountyState::Open,
            bump: bumps.bounty,
        });
        Ok(())
    }
}

pub fn handler(ctx: Context<PostBounty>, question_id: String, amount: u64) -> Result<()> {
    require_gt!(amount, 0, BountyError::ZeroAmount);

    ctx.accounts.deposit(amount)?;
    ctx.accounts
        .init_bounty(question_id.clone(), amount, &ctx.bumps)?;

    emit!(BountyPosted {
        bounty: ctx.accounts.bounty.key(),
        asker: ctx.accounts.asker.key(),
        question_id: question_id.clone(),
        amount,
    });
    msg!(
        "Bounty posted for question {} at {}: {} lamports",
        question_id,
        ctx.accounts.bounty.key(),
        amount
    );
    Ok(())
}
