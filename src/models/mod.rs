pub mod event;
pub mod principal;

pub use event::{Event, EventFilter};
pub use principal::{Principal, PrincipalKind};
