use anchor_lang::prelude::*;

pub const MAX_LABELS: usize = 256;
pub const MAX_OPTIONS: usize = 32;

#[account]
pub struct Election {
    pub authority: Pubkey,
    pub election_id: u64,
    pub end_slot: u64,
    pub num_options: u16,
    pub option_labels: String,
    pub tallies: Vec<u64>,
}
impl Election {
    pub const SPACE: usize = 8 + 32 + 8 + 8 + 2 + (4 + MAX_LABELS)
        + (4 + 8 * MAX_OPTIONS);
}

/// Per-voter eligibility, decided once by the election authority.
/// A freshly created record deserializes from zeroed bytes as `Unset`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Eligibility {
    Unset,
    Pending,
    Approved,
    Rejected,
}

#[account]
pub struct VoterRecord {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub eligibility: Eligibility,
    /// Present iff this voter's vote is currently counted in `tallies`.
    pub vote: Option<u16>,
}
impl VoterRecord {
    pub const SPACE: usize = 8 + 32 + 32 + 1 + (1 + 2);
}

#[event]
pub struct VoteCast {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub option: u16,
}

#[event]
pub struct VoteWithdrawn {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub option: u16,
}
