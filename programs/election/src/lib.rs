use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod states;

use instructions::*;

declare_id!("5K9LFpBoVfzaw6hjfM4XnuwC88p5qt3UJYX5LTfRrvkE");

#[program]
pub mod election {
    use super::*;

    /// Creates the election and zero-initializes one tally per option.
    pub fn initialize_election(
        ctx: Context<InitializeElection>,
        cfg: ElectionConfig,
    ) -> Result<()> {
        initialize_election::handler(ctx, cfg)
    }

    /// Opt-in: creates the caller's voter record with eligibility `Pending`.
    pub fn register_voter(ctx: Context<RegisterVoter>) -> Result<()> {
        register_voter::handler(ctx)
    }

    /// Authority-only, one-shot approval or rejection of a registered voter.
    pub fn update_user_status(ctx: Context<UpdateUserStatus>, approve: bool) -> Result<()> {
        update_user_status::handler(ctx, approve)
    }

    /// Records the caller's single vote and bumps the matching tally.
    pub fn cast_vote(ctx: Context<CastVote>, option: u16) -> Result<()> {
        cast_vote::handler(ctx, option)
    }

    /// Voluntary exit: withdraws any pre-deadline vote and closes the record.
    pub fn close_out(ctx: Context<CloseOut>) -> Result<()> {
        close_out::handler(ctx)
    }

    /// Forced exit: the same withdrawal, but this path never rejects and
    /// stays usable after the election account itself is deleted.
    pub fn clear_record(ctx: Context<ClearRecord>) -> Result<()> {
        clear_record::handler(ctx)
    }

    /// Authority-only deletion of the election account.
    pub fn delete_election(ctx: Context<DeleteElection>) -> Result<()> {
        delete_election::handler(ctx)
    }
}
