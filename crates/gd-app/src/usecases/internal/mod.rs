mod local_store;
mod sequence;

pub use local_store::LocalStore;
pub use sequence::RequestSequence;
