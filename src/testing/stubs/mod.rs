pub mod scripted_driver;

pub use scripted_driver::{Answer, AskedPrompt, ScriptedDriver};
