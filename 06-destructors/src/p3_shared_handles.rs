// Pattern 3: Drop Timing Under Shared Ownership
// Two Rc handles to one resource: dropping the first prints nothing,
// dropping the last runs the destructor.

use std::rc::Rc;
use std::thread;
use std::time::Duration;

struct Resource {
    name: String,
}

impl Resource {
    fn new(name: &str) -> Rc<Self> {
        println!("{}: Constructor called", name);
        Rc::new(Resource {
            name: name.to_string(),
        })
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        println!("{}: Destructor called", self.name);
    }
}

fn main() {
    println!("Creating obj1");
    let obj1 = Resource::new("obj1");
    println!("Creating obj2 as a second handle to obj1");
    let obj2 = Rc::clone(&obj1);

    println!("Dropping obj1");
    drop(obj1); // obj2 still holds the resource, so no destructor yet

    println!("Sleeping for 1 second");
    thread::sleep(Duration::from_secs(1));

    println!("Dropping obj2");
    drop(obj2); // last handle gone, destructor runs now

    println!("End of script");
}

#[cfg(test)]
mod tests {
    use super::Resource;
    use std::rc::Rc;

    #[test]
    fn resource_survives_until_the_last_handle_drops() {
        let first = Resource::new("res");
        let second = Rc::clone(&first);
        assert_eq!(Rc::strong_count(&first), 2);

        drop(first);
        assert_eq!(Rc::strong_count(&second), 1);
        assert_eq!(second.name, "res");
    }
}
