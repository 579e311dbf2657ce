mod init;
pub use init::QueueInit;

mod methods;
pub use methods::QueueMethods;
