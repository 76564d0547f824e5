use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::{Election, Eligibility, VoteCast, VoterRecord};

pub fn handler(ctx: Context<CastVote>, option: u16) -> Result<()> {
    let slot = Clock::get()?.slot;
    let election = &mut ctx.accounts.election;
    let record = &mut ctx.accounts.voter_record;

    election.record_vote(record, option, slot)?;

    emit!(VoteCast {
        election: election.key(),
        voter: record.voter,
        option,
    });
    Ok(())
}

impl Election {
    /// Records the vote and bumps the matching tally counter in one step, so
    /// a rejected call leaves both the record and the tally untouched.
    pub fn record_vote(
        &mut self,
        record: &mut VoterRecord,
        option: u16,
        slot: u64,
    ) -> Result<()> {
        require!(slot < self.end_slot, ElectionError::ElectionClosed);
        require!(
            record.eligibility == Eligibility::Approved,
            ElectionError::NotEligible
        );
        require!(record.vote.is_none(), ElectionError::AlreadyVoted);

        // tallies.len() == num_options, so this is also the bounds check
        let tally = self
            .tallies
            .get_mut(option as usize)
            .ok_or(ElectionError::OptionOutOfRange)?;
        *tally = tally.checked_add(1).ok_or(ElectionError::MathOverflow)?;
        record.vote = Some(option);
        Ok(())
    }
}

#[derive(Accounts)]
pub struct CastVote<'info> {
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [b"election", election.authority.as_ref(), &election.election_id.to_le_bytes()],
        bump
    )]
    pub election: Account<'info, Election>,

    #[account(
        mut,
        seeds = [b"voter", election.key().as_ref(), voter.key().as_ref()],
        bump,
        constraint = voter_record.voter == voter.key() @ ElectionError::NotAuthorized,
    )]
    pub voter_record: Account<'info, VoterRecord>,
}
