//! One module per subcommand group.

pub mod accounts;
pub mod catalog;
