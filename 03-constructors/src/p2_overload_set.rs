// Pattern 2: Constructor Overload Set
// Rust has no function overloading; the idiom is one constructor per call
// shape, each named for what it takes, with Default covering the
// no-argument case.

struct Student {
    name: String,
    age: i32,
}

impl Default for Student {
    fn default() -> Self {
        Student {
            name: "Unknown".to_string(),
            age: 0,
        }
    }
}

impl Student {
    fn new() -> Self {
        Self::default()
    }

    fn named(name: &str) -> Self {
        Student {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn with_age(name: &str, age: i32) -> Self {
        Student {
            name: name.to_string(),
            age,
        }
    }

    fn display(&self) {
        println!("Name: {}, Age: {}", self.name, self.age);
    }
}

fn main() {
    let s1 = Student::new(); // no arguments, all defaults
    s1.display();

    let s2 = Student::named("Lohit"); // name only
    s2.display();

    let s3 = Student::with_age("Lohit P T", 21); // name and age
    s3.display();
}

#[cfg(test)]
mod tests {
    use super::Student;

    #[test]
    fn missing_arguments_fall_back_to_defaults() {
        let s = Student::new();
        assert_eq!(s.name, "Unknown");
        assert_eq!(s.age, 0);

        let s = Student::named("Lohit");
        assert_eq!(s.name, "Lohit");
        assert_eq!(s.age, 0);
    }

    #[test]
    fn full_constructor_sets_every_field() {
        let s = Student::with_age("Lohit P T", 21);
        assert_eq!(s.name, "Lohit P T");
        assert_eq!(s.age, 21);
    }
}
