// Pattern 1: Parameterized Constructor
// An associated `new` that takes every field value up front.

struct Book {
    title: String,
    author: String,
}

impl Book {
    fn new(title: &str, author: &str) -> Self {
        Book {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    fn display(&self) {
        println!("Title: {}, Author: {}", self.title, self.author);
    }
}

fn main() {
    let my_book = Book::new("The Lord of the Rings", "J.R.R. Tolkien");
    my_book.display();
}
