// Pattern 3: Module-Restricted Fields
// The closest Rust analogue to `protected`: a field that sibling code inside
// one module tree may touch, while everything outside stays locked out.
// Rust has no inheritance, so the "subclass" is a wrapper in the privileged
// scope.

mod staff {
    mod person {
        #[derive(Default)]
        pub struct Person {
            // Visible to the enclosing `staff` module only.
            pub(super) name: String,
        }
    }

    #[derive(Default)]
    pub struct Teacher {
        person: person::Person,
        pub department: String,
    }

    impl Teacher {
        // Allowed: this impl lives inside `staff`, the scope that
        // `Person::name` opens itself to.
        pub fn set_name(&mut self, name: &str) {
            self.person.name = name.to_string();
        }

        pub fn print(&self) {
            println!(
                "Name: {}, Department: {}",
                self.person.name, self.department
            );
        }
    }
}

fn main() {
    let mut teacher1 = staff::Teacher::default();
    teacher1.set_name("Dr. Smith");
    teacher1.department = "Computer Science".to_string();
    teacher1.print();

    // This would NOT compile: `name` is only reachable inside `staff`.
    // println!("{}", teacher1.person.name);
}
