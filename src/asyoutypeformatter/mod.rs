mod as_you_type_formatter;
mod formatter_state;

pub use as_you_type_formatter::AsYouTypeFormatter;
pub use formatter_state::{AsYouTypeState, FormatterState};
