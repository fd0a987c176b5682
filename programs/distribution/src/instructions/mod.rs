pub mod create_distribution;
pub mod initialize;
pub mod unlock;
pub mod unlock_reward_for_staking;
pub mod change_pool_address;
pub mod set_bridge_address;
pub mod emit_unlock_quote;
pub mod create_private_offering;
pub mod add_participants;
pub mod set_distribution_address;
pub mod withdraw;
pub mod burn_unassigned;

pub use create_distribution::*;
pub use initialize::*;
pub use unlock::*;
pub use unlock_reward_for_staking::*;
pub use change_pool_address::*;
pub use set_bridge_address::*;
pub use emit_unlock_quote::*;
pub use create_private_offering::*;
pub use add_participants::*;
pub use set_distribution_address::*;
pub use withdraw::*;
pub use burn_unassigned::*;
