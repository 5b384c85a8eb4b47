pub mod accounts;

pub use accounts::AccountDto;
