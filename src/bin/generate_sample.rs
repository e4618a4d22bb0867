/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() as usize) % items.len()]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let brands: [(&str, f64); 4] = [
        ("Volkswagen", 22000.0),
        ("BMW", 41000.0),
        ("Toyota", 25000.0),
        ("Renault", 18000.0),
    ];
    let fuels = ["petrol", "diesel", "electric"];

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path("sample_cars.csv")
        .expect("Failed to create output file");

    writer
        .write_record(["brand", "fuel", "year", "mileage_km", "horsepower", "price"])
        .expect("Failed to write header");

    let n_rows = 200;
    for _ in 0..n_rows {
        let (brand, base_price) = rng.pick(&brands);
        let fuel = rng.pick(&fuels);
        let year = 2005 + (rng.next_u64() % 20) as i64;
        let age = (2025 - year) as f64;
        let mileage = (rng.gauss(15_000.0 * age, 20_000.0)).max(0.0);
        let horsepower = (rng.gauss(130.0, 40.0)).clamp(60.0, 400.0).round();

        // Depreciate by age and mileage, with noise.
        let price = (base_price * (0.92_f64).powf(age) - mileage * 0.03
            + rng.gauss(0.0, 1500.0))
        .max(500.0);

        writer
            .write_record([
                brand.to_string(),
                fuel.to_string(),
                year.to_string(),
                format!("{mileage:.0}"),
                format!("{horsepower:.0}"),
                format!("{price:.2}"),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} cars to sample_cars.csv (semicolon-separated)");
}
