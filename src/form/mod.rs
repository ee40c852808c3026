mod controller;
mod messages;
mod render;

pub use controller::{FormController, FormEvent};
pub use messages::Messages;
pub use render::{Block, TEXT_AREA_HEIGHT, render};
