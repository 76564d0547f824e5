use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::{Election, VoteWithdrawn, VoterRecord};

/// Forced teardown. Runs the same withdrawal routine as `close_out`, but this
/// entry point must never reject: a failed withdrawal is dropped and the
/// record is closed regardless. The election account is optional here — once
/// the authority has deleted the election there is no tally left to fix, only
/// the record to close and refund.
pub fn handler(ctx: Context<ClearRecord>) -> Result<()> {
    // if the clock is unreadable, err on the side of a final tally
    let slot = Clock::get().map(|c| c.slot).unwrap_or(u64::MAX);
    let record = &mut ctx.accounts.voter_record;

    if let Some(election) = ctx.accounts.election.as_mut() {
        if election.key() == record.election {
            if let Ok(Some(option)) = election.withdraw_vote(record, slot) {
                emit!(VoteWithdrawn {
                    election: election.key(),
                    voter: record.voter,
                    option,
                });
            }
        }
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ClearRecord<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    /// Absent after `delete_election`; the record can still be cleared.
    #[account(
        mut,
        seeds = [b"election", election.authority.as_ref(), &election.election_id.to_le_bytes()],
        bump
    )]
    pub election: Option<Account<'info, Election>>,

    #[account(
        mut,
        close = voter,
        seeds = [b"voter", voter_record.election.as_ref(), voter.key().as_ref()],
        bump,
        constraint = voter_record.voter == voter.key() @ ElectionError::NotAuthorized,
    )]
    pub voter_record: Account<'info, VoterRecord>,
}
