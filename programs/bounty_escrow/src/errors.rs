use anchor_lang::prelude::*;

#[error_code]
pub enum BountyError {
    #[msg("Bounty amount must be greater than zero")]
    ZeroAmount,
    #[msg("Question id exceeds the maximum seed length")]
    QuestionIdTooLong,
    #[msg("This bounty has already been awarded or cancelled")]
    BountyNotOpen,
    #[msg("Signer is not the asker who posted this bounty")]
    Unauthorized,
}
