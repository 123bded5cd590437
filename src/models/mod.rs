pub mod flag;
pub mod project;
pub mod report;
pub mod status;
pub mod ticket;

pub use flag::ComplFlag;
pub use project::Project;
pub use report::TicketReport;
pub use status::SlaStatus;
pub use ticket::Ticket;
