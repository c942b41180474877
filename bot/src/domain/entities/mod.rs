//! Domain entities
//!
//! Pure domain models for flair requests, badge templates and tickets.

pub mod flair;
pub mod label;
pub mod request;
pub mod role;
pub mod template;
pub mod ticket;

pub use flair::{ComposedFlair, FlairError, FlairErrorKind, FlairOutcome, MAX_FLAIR_CHARS};
pub use label::{ComboCount, LabelCatalog, RequestLabel};
pub use request::FlairRequest;
pub use role::{Role, RoleTier};
pub use template::{BadgeTemplate, TemplateCatalog};
pub use ticket::{Lanes, Ticket, TicketLane};
