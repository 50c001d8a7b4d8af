mod stack;

#[cfg(test)]
mod tests;

pub use stack::HistoryStack;
