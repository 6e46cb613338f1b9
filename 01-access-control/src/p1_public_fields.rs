// Pattern 1: Public Fields
// Every field is marked `pub`, so callers outside the module read them directly.

mod school {
    pub struct Teacher {
        pub name: String,
        pub department: String,
        pub salary: f64,
        pub subject: String,
    }

    impl Teacher {
        pub fn new(name: &str, department: &str, salary: f64, subject: &str) -> Self {
            Teacher {
                name: name.to_string(),
                department: department.to_string(),
                salary,
                subject: subject.to_string(),
            }
        }

        pub fn display_details(&self) {
            println!("Name: {}", self.name);
            println!("Department: {}", self.department);
            println!("Salary: {}", self.salary);
            println!("Subject: {}", self.subject);
        }
    }
}

use school::Teacher;

fn main() {
    let teacher1 = Teacher::new("Dr. Smith", "Computer Science", 60000.0, "Programming");

    // Direct field access works because the fields are public.
    println!("Teacher's Name: {}", teacher1.name);
    teacher1.display_details();
}
