mod tools;

pub use tools::FileTools;
