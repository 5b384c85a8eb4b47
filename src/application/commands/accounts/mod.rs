mod add;
mod service;

pub use add::AddAccountCommand;
pub use service::AccountCommandService;
