//! Central authentication and session management for the front of house.
//! Keep the public surface thin and split implementation across sub-modules.

mod principal;
mod role;
mod roster;
mod session;

pub use principal::Principal;
pub use role::Role;
pub use roster::{CredentialSource, Roster, RosterEntry, default_roster};
pub use session::SessionAuthority;
