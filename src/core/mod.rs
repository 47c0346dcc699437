pub mod engine;
pub mod pipeline;
pub mod reader;
pub mod renderer;

#[cfg(test)]
pub(crate) mod test_support;
