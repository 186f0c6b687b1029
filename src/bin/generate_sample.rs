use anyhow::Result;
use serde::Serialize;

/// One row of the sample CSV, headers matching the dashboard's loader.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'static str,
}

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
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (site, success rate)
    let sites = [
        ("CCAFS LC-40", 0.55),
        ("CCAFS SLC-40", 0.60),
        ("KSC LC-39A", 0.75),
        ("VAFB SLC-4E", 0.60),
    ];

    // (booster version category, payload range in kg)
    let boosters = [
        ("v1.0", 0.0, 600.0),
        ("v1.1", 500.0, 4000.0),
        ("FT", 1500.0, 9600.0),
        ("B4", 2000.0, 9600.0),
        ("B5", 3000.0, 9600.0),
    ];

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut flight_number: u32 = 1;
    for (site, success_rate) in sites {
        for (booster, payload_min, payload_max) in boosters {
            for _ in 0..3 {
                let payload_mass =
                    (payload_min + (payload_max - payload_min) * rng.next_f64()).round();
                let class = u8::from(rng.next_f64() < success_rate);

                writer.serialize(SampleRow {
                    flight_number,
                    launch_site: site,
                    class,
                    payload_mass,
                    booster_category: booster,
                })?;
                flight_number += 1;
            }
        }
    }
    writer.flush()?;

    println!("Wrote {} launch records to {output_path}", flight_number - 1);
    Ok(())
}
