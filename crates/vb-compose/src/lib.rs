/// Moteur de composition des messages.
///
/// Turns a text message and layout directives into a grid of board codes.
pub mod background;
pub mod compositor;
pub mod justify;
pub mod mapper;
pub mod wrap;

pub use compositor::{Composer, Layout};
