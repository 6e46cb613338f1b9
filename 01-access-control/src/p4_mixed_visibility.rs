// Pattern 4: Mixed Visibility
// One record, two access levels: `age` is public and freely writable,
// `name` is private and readable only through a method.

mod people {
    pub struct Person {
        name: String,
        pub age: u32,
    }

    impl Person {
        pub fn new(name: &str, age: u32) -> Self {
            Person {
                name: name.to_string(),
                age,
            }
        }

        pub fn print_name(&self) {
            println!("Name: {}", self.name);
        }
    }
}

fn main() {
    let mut person1 = people::Person::new("Lohit", 21);

    person1.age = 22; // public field, assignable from outside the module
    println!("Age: {}", person1.age);
    person1.print_name();

    // This would NOT compile: `name` is private.
    // person1.name = "P T".to_string();
}
