// Pattern 1: Derived Clone and Copy
// #[derive(Clone)] generates a member-wise duplicate. For all-primitive
// records, #[derive(Copy)] makes the duplication implicit on assignment,
// and each duplicate holds its own values from then on.

#[derive(Clone)]
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

#[derive(Clone, Copy)]
struct Counter {
    value: i32,
}

impl Counter {
    fn new(value: i32) -> Self {
        println!("Constructor called for value: {}", value);
        Counter { value }
    }
}

fn main() {
    let book1 = Book::new("The Hobbit", "J.R.R. Tolkien");
    let book2 = book1.clone(); // member-wise duplicate

    book1.display();
    book2.display();

    let mut obj1 = Counter::new(10);
    let obj2 = obj1; // Copy: duplicated implicitly, no constructor runs

    println!("obj1.value: {}", obj1.value);
    println!("obj2.value: {}", obj2.value);

    obj1.value = 20; // the duplicate is untouched

    println!("After modifying obj1.value:");
    println!("obj1.value: {}", obj1.value);
    println!("obj2.value: {}", obj2.value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutating_the_original_leaves_the_duplicate_alone() {
        let mut original = Counter::new(10);
        let duplicate = original;

        original.value = 20;
        assert_eq!(duplicate.value, 10);
        assert_eq!(original.value, 20);
    }

    #[test]
    fn cloned_book_owns_its_own_strings() {
        let book1 = Book::new("The Hobbit", "J.R.R. Tolkien");
        let mut book2 = book1.clone();

        book2.title.push_str(" (illustrated)");
        assert_eq!(book1.title, "The Hobbit");
        assert_eq!(book2.author, book1.author);
    }
}
