/// Per-call observer for human-readable progress text.
///
/// The sink is injected into each detection call rather than registered
/// globally, so the computation stays side-effect-free and the messages have
/// zero influence on the result.
pub trait ProgressSink {
    fn emit(&mut self, message: &str);
}

impl<F: FnMut(&str)> ProgressSink for F {
    fn emit(&mut self, message: &str) {
        self(message)
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&mut self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut lines = Vec::new();
        let mut sink = |message: &str| lines.push(message.to_string());
        ProgressSink::emit(&mut sink, "stage one");
        ProgressSink::emit(&mut sink, "stage two");
        assert_eq!(lines, vec!["stage one", "stage two"]);
    }
}
