pub mod init;

pub use init::uniform_weight;
