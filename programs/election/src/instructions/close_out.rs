use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::{Election, VoteWithdrawn, VoterRecord};

pub fn handler(ctx: Context<CloseOut>) -> Result<()> {
    let slot = Clock::get()?.slot;
    let election = &mut ctx.accounts.election;
    let record = &mut ctx.accounts.voter_record;

    if let Some(option) = election.withdraw_vote(record, slot)? {
        emit!(VoteWithdrawn {
            election: election.key(),
            voter: record.voter,
            option,
        });
    }
    // the record account itself is closed by the `close = voter` constraint
    Ok(())
}

impl Election {
    /// Shared withdrawal routine behind both the voluntary close-out and the
    /// forced clear path. Before the deadline it removes the recorded vote
    /// from its tally; at or after the deadline the tally is final and this
    /// is a no-op. Returns the withdrawn option, if any.
    pub fn withdraw_vote(
        &mut self,
        record: &mut VoterRecord,
        slot: u64,
    ) -> Result<Option<u16>> {
        if slot >= self.end_slot {
            return Ok(None);
        }
        let Some(option) = record.vote else {
            return Ok(None);
        };
        let tally = self
            .tallies
            .get_mut(option as usize)
            .ok_or(ElectionError::OptionOutOfRange)?;
        *tally = tally.checked_sub(1).ok_or(ElectionError::MathOverflow)?;
        record.vote = None;
        Ok(Some(option))
    }
}

#[derive(Accounts)]
pub struct CloseOut<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [b"election", election.authority.as_ref(), &election.election_id.to_le_bytes()],
        bump
    )]
    pub election: Account<'info, Election>,

    #[account(
        mut,
        close = voter,
        seeds = [b"voter", election.key().as_ref(), voter.key().as_ref()],
        bump,
        constraint = voter_record.voter == voter.key() @ ElectionError::NotAuthorized,
    )]
    pub voter_record: Account<'info, VoterRecord>,
}
