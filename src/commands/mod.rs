pub mod add;
pub mod init;
