// Pattern 2: Private Fields
// Fields with no `pub` are sealed inside their module; the only way in is
// through the methods the module chooses to expose.

mod school {
    use std::fmt;

    pub struct Teacher {
        name: String,
        department: String,
    }

    impl Teacher {
        pub fn new(name: &str, department: &str) -> Self {
            Teacher {
                name: name.to_string(),
                department: department.to_string(),
            }
        }
    }

    impl fmt::Display for Teacher {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Name: {}, Department: {}", self.name, self.department)
        }
    }
}

fn main() {
    let teacher1 = school::Teacher::new("Dr. Smith", "Computer Science");
    println!("{}", teacher1);

    // This would NOT compile: `name` is private to the `school` module.
    // println!("{}", teacher1.name);
}

#[cfg(test)]
mod tests {
    use super::school::Teacher;

    #[test]
    fn display_shows_name_and_department() {
        let teacher = Teacher::new("Dr. Smith", "Computer Science");
        assert_eq!(
            teacher.to_string(),
            "Name: Dr. Smith, Department: Computer Science"
        );
    }
}
