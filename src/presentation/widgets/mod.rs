mod choice_select;
mod input;
mod motivation_input;

pub use choice_select::ChoiceSelect;
pub use input::TextInput;
pub use motivation_input::MotivationInput;
