use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::{Election, Eligibility, VoterRecord};

pub fn handler(ctx: Context<UpdateUserStatus>, approve: bool) -> Result<()> {
    let slot = Clock::get()?.slot;
    let election = &ctx.accounts.election;
    let record = &mut ctx.accounts.voter_record;

    record.decide(election, approve, slot)?;

    emit!(EligibilityUpdated {
        election: election.key(),
        voter: record.voter,
        approved: approve,
    });
    Ok(())
}

impl VoterRecord {
    /// The authority's one-shot decision. A replay finds the record no longer
    /// `Pending` and fails, leaving the first decision in place.
    pub fn decide(&mut self, election: &Election, approve: bool, slot: u64) -> Result<()> {
        require!(slot < election.end_slot, ElectionError::ElectionClosed);
        require!(
            self.eligibility == Eligibility::Pending,
            ElectionError::NotPending
        );
        self.eligibility = if approve {
            Eligibility::Approved
        } else {
            Eligibility::Rejected
        };
        Ok(())
    }
}

#[event]
pub struct EligibilityUpdated {
    pub election: Pubkey,
    pub voter: Pubkey,
    pub approved: bool,
}

#[derive(Accounts)]
pub struct UpdateUserStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"election", election.authority.as_ref(), &election.election_id.to_le_bytes()],
        bump,
        constraint = election.authority == authority.key() @ ElectionError::NotAuthorized,
    )]
    pub election: Account<'info, Election>,

    /// CHECK: only used as a PDA seed to locate the record being decided
    pub voter: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"voter", election.key().as_ref(), voter.key().as_ref()],
        bump,
        constraint = voter_record.election == election.key() @ ElectionError::ElectionMismatch,
    )]
    pub voter_record: Account<'info, VoterRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::fixtures;

    #[test]
    fn approves_pending_voter() {
        let election = fixtures::election(2, 5_000);
        let mut record = fixtures::record(Eligibility::Pending);

        record.decide(&election, true, 100).unwrap();
        assert_eq!(record.eligibility, Eligibility::Approved);
    }

    #[test]
    fn rejects_pending_voter() {
        let election = fixtures::election(2, 5_000);
        let mut record = fixtures::record(Eligibility::Pending);

        record.decide(&election, false, 100).unwrap();
        assert_eq!(record.eligibility, Eligibility::Rejected);
    }

    #[test]
    fn second_decision_fails_and_keeps_first() {
        let election = fixtures::election(2, 5_000);
        let mut record = fixtures::record(Eligibility::Pending);
        record.decide(&election, true, 100).unwrap();

        let res = record.decide(&election, false, 101);
        assert_eq!(res.unwrap_err(), ElectionError::NotPending.into());
        assert_eq!(record.eligibility, Eligibility::Approved);
    }

    #[test]
    fn cannot_decide_unregistered_voter() {
        let election = fixtures::election(2, 5_000);
        let mut record = fixtures::record(Eligibility::Unset);

        let res = record.decide(&election, true, 100);
        assert_eq!(res.unwrap_err(), ElectionError::NotPending.into());
        assert_eq!(record.eligibility, Eligibility::Unset);
    }

    #[test]
    fn cannot_decide_after_deadline() {
        let election = fixtures::election(2, 5_000);
        let mut record = fixtures::record(Eligibility::Pending);

        let res = record.decide(&election, true, 5_000);
        assert_eq!(res.unwrap_err(), ElectionError::ElectionClosed.into());
        assert_eq!(record.eligibility, Eligibility::Pending);
    }
}
