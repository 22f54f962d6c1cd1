//! Destination for committed letters

/// Receives one call per completed hold
pub trait TextSink {
    fn append_letter(&mut self, letter: char);
}

impl TextSink for String {
    fn append_letter(&mut self, letter: char) {
        self.push(letter);
    }
}
