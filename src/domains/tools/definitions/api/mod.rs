pub mod quote;
pub mod weather;

pub use quote::GetRandomQuoteTool;
pub use weather::GetWeatherTool;
