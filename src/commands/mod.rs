pub mod branch;
pub mod checkout;
pub mod init;
pub mod remote;
pub mod run;
pub mod switch;
