// Pattern 2: Deep Copy of an Owned Buffer
// A hand-written Clone that allocates fresh storage, so a duplicate never
// shares bytes with its source. The buffer lives in a Vec, which releases
// the allocation exactly once: on drop, or when `append` swaps in a
// bigger one.

use std::borrow::Cow;

struct TextBuffer {
    data: Vec<u8>,
    len: usize,
}

impl TextBuffer {
    fn new(text: &str) -> Self {
        let buffer = TextBuffer {
            data: text.as_bytes().to_vec(),
            len: text.len(),
        };
        println!("Constructor called for: {}", buffer.text());
        buffer
    }

    fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn display(&self) {
        println!("String: {}, Length: {}", self.text(), self.len());
    }

    fn append(&mut self, text: &str) {
        let mut grown = Vec::with_capacity(self.len + text.len());
        grown.extend_from_slice(&self.data);
        grown.extend_from_slice(text.as_bytes());

        // The old buffer is released here, when the replaced Vec drops.
        self.data = grown;
        self.len = self.data.len();
    }
}

impl Clone for TextBuffer {
    // Deep copy: a fresh allocation with the content duplicated into it.
    fn clone(&self) -> Self {
        let copy = TextBuffer {
            data: self.data.clone(),
            len: self.len,
        };
        println!("Copy constructor called for: {}", copy.text());
        copy
    }
}

impl Drop for TextBuffer {
    fn drop(&mut self) {
        println!("Destructor called for: {}", self.text());
    }
}

fn main() {
    let mut s1 = TextBuffer::new("Hello");
    s1.display();

    let s2 = s1.clone();
    s2.display();

    s1.append(" World"); // mutates s1 only
    s1.display();
    s2.display(); // unchanged: the copy owns its own bytes
}

#[cfg(test)]
mod tests {
    use super::TextBuffer;

    #[test]
    fn append_grows_content_and_length() {
        let mut buffer = TextBuffer::new("Hello");
        buffer.append(" World");

        assert_eq!(buffer.text(), "Hello World");
        assert_eq!(buffer.len(), 11);
    }

    #[test]
    fn clone_is_isolated_from_source_mutation() {
        let mut source = TextBuffer::new("Hello");
        let copy = source.clone();

        source.append(" World");

        assert_eq!(copy.text(), "Hello");
        assert_eq!(source.text(), "Hello World");
    }

    #[test]
    fn clone_is_isolated_from_copy_mutation() {
        let source = TextBuffer::new("Hello");
        let mut copy = source.clone();

        copy.append("!");

        assert_eq!(source.text(), "Hello");
        assert_eq!(copy.text(), "Hello!");
    }
}
