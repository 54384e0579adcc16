use crate::domain::traits::Output;

/// The object complex commands hand their actual work over to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Receiver;

impl Receiver {
    pub fn new() -> Self {
        Self
    }

    pub fn do_something(&self, out: &dyn Output, text: &str) {
        out.emit(&format!("Receiver: button pressed ({}.)", text));
    }

    pub fn do_something_else(&self, out: &dyn Output, text: &str) {
        out.emit(&format!("Receiver: enough water ({}.)", text));
    }
}
