// Endpoints reachable without an authorization header
pub mod login;
pub mod root;
pub mod talker;

pub use login::login_post;
pub use root::{health, root};
pub use talker::{talker_get, talker_list};
