use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::{Election, Eligibility, VoterRecord};

pub fn handler(ctx: Context<RegisterVoter>) -> Result<()> {
    let slot = Clock::get()?.slot;
    let election = &ctx.accounts.election;
    let record = &mut ctx.accounts.voter_record;

    if record.election == Pubkey::default() {
        // freshly created (or recreated after a close-out)
        record.election = election.key();
        record.voter = ctx.accounts.voter.key();
    } else {
        require_keys_eq!(record.election, election.key(), ElectionError::ElectionMismatch);
        require_keys_eq!(
            record.voter,
            ctx.accounts.voter.key(),
            ElectionError::NotAuthorized
        );
    }

    record.register(election, slot)?;

    emit!(VoterRegistered {
        election: election.key(),
        voter: record.voter,
    });
    Ok(())
}

impl VoterRecord {
    /// Opt-in: a voter may register once, before the deadline. Eligibility
    /// starts at `Pending` until the authority decides.
    pub fn register(&mut self, election: &Election, slot: u64) -> Result<()> {
        require!(slot < election.end_slot, ElectionError::ElectionClosed);
        require!(
            self.eligibility == Eligibility::Unset,
            ElectionError::AlreadyRegistered
        );
        self.eligibility = Eligibility::Pending;
        Ok(())
    }
}

#[event]
pub struct VoterRegistered {
    pub election: Pubkey,
    pub voter: Pubkey,
}

#[derive(Accounts)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [b"election", election.authority.as_ref(), &election.election_id.to_le_bytes()],
        bump
    )]
    pub election: Account<'info, Election>,

    #[account(
        init_if_needed,
        payer = voter,
        space = VoterRecord::SPACE,
        seeds = [b"voter", election.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}
