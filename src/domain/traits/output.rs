/// Output trait - where commands, the receiver and the invoker write their lines
pub trait Output: Send + Sync {
    /// Emit one line of text
    fn emit(&self, line: &str);
}
