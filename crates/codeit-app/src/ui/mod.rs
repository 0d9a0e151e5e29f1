//! Terminal presentation: pure functions from state to text

pub mod header;
pub mod input;
pub mod message_list;
pub mod status;

pub use header::render_header;
pub use input::{InputAction, InputBuffer, SlashCommand};
pub use message_list::{render_conversation, render_turn, time_label, Transcript};
pub use status::{render_status, status_label};
