// Write endpoints; routed behind the token middleware
pub mod talker;

pub use talker::{talker_delete, talker_post, talker_put};
