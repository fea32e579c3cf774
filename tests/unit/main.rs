mod mock;
mod types;
