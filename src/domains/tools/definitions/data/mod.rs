pub mod process_json;

pub use process_json::ProcessJsonTool;
