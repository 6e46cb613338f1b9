// Pattern 1: Chained Setters
// Each setter returns `&mut Self`, so consecutive calls keep mutating the
// same instance before the final read.

struct Cuboid {
    length: f64,
    breadth: f64,
    height: f64,
}

impl Cuboid {
    fn new(length: f64, breadth: f64, height: f64) -> Self {
        Cuboid {
            length,
            breadth,
            height,
        }
    }

    fn volume(&self) -> f64 {
        self.length * self.breadth * self.height
    }

    fn set_length(&mut self, length: f64) -> &mut Self {
        self.length = length;
        self
    }

    fn set_breadth(&mut self, breadth: f64) -> &mut Self {
        self.breadth = breadth;
        self
    }

    fn set_height(&mut self, height: f64) -> &mut Self {
        self.height = height;
        self
    }
}

fn main() {
    let mut box1 = Cuboid::new(10.0, 5.0, 2.0);
    println!("Volume of box1: {}", box1.volume());

    // One instance, three mutations, one statement.
    box1.set_length(15.0).set_breadth(7.0).set_height(3.0);
    println!("New volume of box1: {}", box1.volume());
}
