pub mod check_style;

pub use check_style::{CheckCodeStyleTool, STYLE_RULES};
