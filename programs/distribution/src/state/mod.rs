pub mod distribution_state;
pub mod pool;
pub mod private_offering;

pub use distribution_state::*;
pub use pool::*;
pub use private_offering::*;
