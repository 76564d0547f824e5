use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::Election;

/// Creator-gated teardown of the election itself. Voter records are closed
/// individually through `close_out` / `clear_record`; program code upgrades
/// are gated by the loader's upgrade authority, outside the program.
pub fn handler(ctx: Context<DeleteElection>) -> Result<()> {
    msg!(
        "election {} deleted by authority",
        ctx.accounts.election.election_id
    );
    Ok(())
}

#[derive(Accounts)]
pub struct DeleteElection<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        close = authority,
        seeds = [b"election", authority.key().as_ref(), &election.election_id.to_le_bytes()],
        bump,
        constraint = election.authority == authority.key() @ ElectionError::NotAuthorized,
    )]
    pub election: Account<'info, Election>,
}
