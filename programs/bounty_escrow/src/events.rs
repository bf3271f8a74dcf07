use anchor_lang::prelude::*;

#[event]
pub struct BountyPosted {
    pub bounty: Pubkey,
    pub asker: Pubkey,
    pub question_id: String,
    pub amount: u64,
}

#[event]
pub struct BountyAwarded {
    pub bounty: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BountyCancelled {
    pub bounty: Pubkey,
    pub asker: Pubkey,
    pub amount: u64,
}
