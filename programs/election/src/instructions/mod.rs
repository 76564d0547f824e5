pub mod cast_vote;
pub mod clear_record;
pub mod close_out;
pub mod delete_election;
pub mod initialize_election;
pub mod register_voter;
pub mod update_user_status;

pub use cast_vote::*;
pub use clear_record::*;
pub use close_out::*;
pub use delete_election::*;
pub use initialize_election::*;
pub use register_voter::*;
pub use update_user_status::*;
