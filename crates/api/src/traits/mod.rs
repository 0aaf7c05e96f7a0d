//! Engine contracts shared by every cipherkit algorithm

pub mod block;
pub mod stream;
pub mod wrap;

pub use block::BlockCipher;
pub use stream::StreamCipher;
pub use wrap::Wrapper;
