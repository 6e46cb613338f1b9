// Pattern 2: Consuming Builder
// The same chaining property with setters that take `self` by value — the
// usual shape for Rust construction APIs. The builder moves through the
// chain and is gone after build().

#[derive(Debug)]
struct Cuboid {
    length: f64,
    breadth: f64,
    height: f64,
}

struct CuboidBuilder {
    length: f64,
    breadth: f64,
    height: f64,
}

impl Cuboid {
    fn builder() -> CuboidBuilder {
        CuboidBuilder::new()
    }

    fn volume(&self) -> f64 {
        self.length * self.breadth * self.height
    }
}

impl CuboidBuilder {
    // Defaults describe a unit cube.
    fn new() -> Self {
        CuboidBuilder {
            length: 1.0,
            breadth: 1.0,
            height: 1.0,
        }
    }

    fn length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    fn breadth(mut self, breadth: f64) -> Self {
        self.breadth = breadth;
        self
    }

    fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    fn build(self) -> Cuboid {
        Cuboid {
            length: self.length,
            breadth: self.breadth,
            height: self.height,
        }
    }
}

fn main() {
    let cuboid = Cuboid::builder()
        .length(15.0)
        .breadth(7.0)
        .height(3.0)
        .build();

    println!("Built cuboid: {:?}", cuboid);
    println!("Volume: {}", cuboid.volume());

    // This would NOT compile: each setter consumes the builder, so it
    // cannot be reused after the chain ends.
    // let b = Cuboid::builder();
    // let c1 = b.build();
    // let c2 = b.build(); // use of moved value
}

#[cfg(test)]
mod tests {
    use super::Cuboid;

    #[test]
    fn chained_builder_calls_all_land_on_one_value() {
        let cuboid = Cuboid::builder()
            .length(15.0)
            .breadth(7.0)
            .height(3.0)
            .build();

        assert_eq!(cuboid.volume(), 315.0);
    }

    #[test]
    fn unset_dimensions_stay_at_the_unit_default() {
        let cuboid = Cuboid::builder().length(4.0).build();
        assert_eq!(cuboid.volume(), 4.0);
    }
}
