use anchor_lang::prelude::*;
use crate::errors::ElectionError;
use crate::states::{Election, MAX_LABELS, MAX_OPTIONS};

pub fn handler(ctx: Context<InitializeElection>, cfg: ElectionConfig) -> Result<()> {
    let slot = Clock::get()?.slot;
    let authority = ctx.accounts.authority.key();

    ctx.accounts
        .election
        .set_inner(Election::from_config(cfg, authority, slot)?);

    let election = &ctx.accounts.election;
    emit!(ElectionCreated {
        election: election.key(),
        authority,
        election_id: election.election_id,
        end_slot: election.end_slot,
        num_options: election.num_options,
    });
    Ok(())
}

#[event]
pub struct ElectionCreated {
    pub election: Pubkey,
    pub authority: Pubkey,
    pub election_id: u64,
    pub end_slot: u64,
    pub num_options: u16,
}

#[derive(Accounts)]
#[instruction(cfg: ElectionConfig)]
pub struct InitializeElection<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Election::SPACE,
        seeds = [b"election", authority.key().as_ref(), &cfg.election_id.to_le_bytes()],
        bump
    )]
    pub election: Account<'info, Election>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct ElectionConfig {
    pub election_id: u64,
    pub end_slot: u64,
    pub num_options: u16,
    pub option_labels: String,
}

impl Election {
    pub fn from_config(cfg: ElectionConfig, authority: Pubkey, slot: u64) -> Result<Self> {
        require!(cfg.election_id != 0, ElectionError::InvalidElectionId);
        require!(cfg.num_options > 0, ElectionError::NoVoteOptions);
        require!(
            cfg.num_options as usize <= MAX_OPTIONS,
            ElectionError::TooManyOptions
        );
        require!(
            cfg.option_labels.len() <= MAX_LABELS,
            ElectionError::LabelsTooLong
        );
        require!(cfg.end_slot > slot, ElectionError::EndSlotPassed);

        Ok(Self {
            authority,
            election_id: cfg.election_id,
            end_slot: cfg.end_slot,
            num_options: cfg.num_options,
            option_labels: cfg.option_labels,
            // one zeroed counter per option, fixed for the whole election
            tallies: vec![0; cfg.num_options as usize],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ElectionConfig {
        ElectionConfig {
            election_id: 7,
            end_slot: 5_000,
            num_options: 2,
            option_labels: "ETH,ALGO".to_string(),
        }
    }

    #[test]
    fn creates_with_zeroed_tallies() {
        let election = Election::from_config(config(), Pubkey::new_unique(), 0).unwrap();
        assert_eq!(election.num_options, 2);
        assert_eq!(election.tallies, vec![0, 0]);
        assert_eq!(election.option_labels, "ETH,ALGO");
    }

    #[test]
    fn rejects_zero_options() {
        let cfg = ElectionConfig {
            num_options: 0,
            ..config()
        };
        let res = Election::from_config(cfg, Pubkey::new_unique(), 0);
        assert_eq!(res.err().unwrap(), ElectionError::NoVoteOptions.into());
    }

    #[test]
    fn rejects_too_many_options() {
        let cfg = ElectionConfig {
            num_options: MAX_OPTIONS as u16 + 1,
            ..config()
        };
        let res = Election::from_config(cfg, Pubkey::new_unique(), 0);
        assert_eq!(res.err().unwrap(), ElectionError::TooManyOptions.into());
    }

    #[test]
    fn rejects_zero_election_id() {
        let cfg = ElectionConfig {
            election_id: 0,
            ..config()
        };
        let res = Election::from_config(cfg, Pubkey::new_unique(), 0);
        assert_eq!(res.err().unwrap(), ElectionError::InvalidElectionId.into());
    }

    #[test]
    fn rejects_end_slot_not_in_future() {
        let res = Election::from_config(config(), Pubkey::new_unique(), 5_000);
        assert_eq!(res.err().unwrap(), ElectionError::EndSlotPassed.into());
    }
}
