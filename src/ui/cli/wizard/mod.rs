mod wizard;

pub use wizard::{collect_profile, prompt_form};
