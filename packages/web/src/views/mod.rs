mod auth;
pub use auth::Auth;

mod notes;
pub use notes::Notes;
