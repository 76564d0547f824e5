use anchor_lang::prelude::*;

#[error_code]
pub enum ElectionError {
    #[msg("Election deadline has passed")]
    ElectionClosed,
    #[msg("Unauthorized")]
    NotAuthorized,
    #[msg("Account is already registered for this election")]
    AlreadyRegistered,
    #[msg("Voter is not pending review")]
    NotPending,
    #[msg("Voter is not approved to vote")]
    NotEligible,
    #[msg("Voter has already voted")]
    AlreadyVoted,
    #[msg("Vote option index out of range")]
    OptionOutOfRange,
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid election ID")]
    InvalidElectionId,
    #[msg("Election must offer at least one option")]
    NoVoteOptions,
    #[msg("Too many vote options")]
    TooManyOptions,
    #[msg("Option labels too long")]
    LabelsTooLong,
    #[msg("Election end slot is not in the future")]
    EndSlotPassed,

    #[msg("Voter record doesn't belong to this election")]
    ElectionMismatch,
}
