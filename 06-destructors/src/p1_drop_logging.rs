// Pattern 1: Drop as a Destructor
// Drop::drop runs exactly once, automatically, when the owner leaves scope.

struct Tracked;

impl Tracked {
    fn new() -> Self {
        println!("Constructor called");
        Tracked
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        println!("Destructor called");
    }
}

fn main() {
    println!("Creating an object of Tracked.");
    let _obj = Tracked::new();
    println!("The object is about to go out of scope.");
} // _obj drops here, printing the destructor line
