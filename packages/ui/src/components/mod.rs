//! Small form controls shared by the dialogs and views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod textarea;
pub use textarea::Textarea;

mod label;
pub use label::Label;

mod badge;
pub use badge::Badge;
