#![allow(hidden_glob_reexports)]
#![allow(clippy::async_yields_async)]
mod admin;
mod dashboard;
mod health_check;
mod log_out;
mod login;

pub use admin::*;
pub use dashboard::*;
pub use health_check::*;
pub use log_out::*;
pub use login::*;
