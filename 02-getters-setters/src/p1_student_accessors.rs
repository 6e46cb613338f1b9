// Pattern 1: Accessor Methods
// Private state behind getter/setter pairs. The age setter validates its
// input and drops bad writes without signaling.

mod school {
    #[derive(Default)]
    pub struct Student {
        name: String,
        age: i32,
    }

    impl Student {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_name(&mut self, name: &str) {
            self.name = name.to_string();
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        // Non-positive ages are ignored; the stored value stays put.
        pub fn set_age(&mut self, age: i32) {
            if age > 0 {
                self.age = age;
            }
        }

        pub fn age(&self) -> i32 {
            self.age
        }
    }
}

use school::Student;

fn main() {
    let mut s1 = Student::new();
    s1.set_name("Lohit");
    s1.set_age(21);

    println!("Name: {}", s1.name());
    println!("Age: {}", s1.age());
}

#[cfg(test)]
mod tests {
    use super::school::Student;

    #[test]
    fn set_age_ignores_non_positive_values() {
        let mut student = Student::new();
        assert_eq!(student.age(), 0);

        student.set_age(-5);
        assert_eq!(student.age(), 0);

        student.set_age(21);
        assert_eq!(student.age(), 21);

        student.set_age(0);
        assert_eq!(student.age(), 21);
    }

    #[test]
    fn set_name_replaces_the_stored_name() {
        let mut student = Student::new();
        student.set_name("Lohit");
        assert_eq!(student.name(), "Lohit");
    }
}
