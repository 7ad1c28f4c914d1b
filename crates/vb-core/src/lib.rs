/// Types, tables de codes et configuration partagés par le workspace.
///
/// This crate holds everything the composer and the sender agree on: the
/// board dimensions, the character and color code tables, and the TOML
/// configuration.

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{Code, CodeTable};
pub use color::ColorTable;
pub use config::{BoardConfig, Justify};
pub use error::CoreError;
pub use frame::{BOARD_COLS, BOARD_ROWS, JustifiedRow, MessageGrid};
