// Pattern 2: Compiler-Generated Cleanup
// No Drop impl here. The compiler still generates drop glue that releases
// every field at scope exit; there is simply nothing extra to run.

struct Simple;

impl Simple {
    fn new() -> Self {
        println!("Constructor called.");
        Simple
    }
}

fn main() {
    println!("Creating an object of Simple.");
    let _obj = Simple::new();
    println!("The object is about to go out of scope.");

    // When `_obj` goes out of scope the generated cleanup runs silently:
    // no output, no leak, nothing to pair by hand.
}
