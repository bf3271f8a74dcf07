use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("BAZdzAroYAZYNrt8PxpxbvrA87wdMighpPSzS4NcDaYY");

#[program]
pub mod bounty_escrow {
    use super::*;

    /// Post a new bounty: the asker locks lamports against a question id
    pub fn post_bounty(ctx: Context<PostBounty>, question_id: String, amount: u64) -> Result<()> {
        instructions::post::handler(ctx, question_id, amount)
    }

    /// Award the bounty: the asker pays the full held balance to a winner
    pub fn award_bounty(ctx: Context<AwardBounty>, question_id: String) -> Result<()> {
        instructions::award::handler(ctx, question_id)
    }

    /// Cancel the bounty: the asker reclaims the full held balance
    pub fn cancel_bounty(ctx: Context<CancelBounty>, question_id: String) -> Result<()> {
        instructions::cancel::handler(ctx, question_id)
    }
}
