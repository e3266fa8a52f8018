//! End-to-end demonstration: generate a random line-up, assign it to the
//! minimum number of stages, and print the resulting programme.

use rand::rngs::StdRng;
use rand::SeedableRng;

use mainstage::assign;
use mainstage::generate::{random_shows, RandomShowsConfig};
use mainstage::io::render_schedule;
use mainstage::naming::StageNames;

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);

    let shows = random_shows(&RandomShowsConfig::with_count(15), &mut rng);
    println!("Generated {} shows:", shows.len());
    for show in &shows {
        println!(
            "  {}: {} - {}",
            show.name(),
            show.start().value(),
            show.end().value()
        );
    }

    let schedule = assign(&shows).expect("generated shows are well-formed");
    println!(
        "\n{} stages needed for {} shows:\n",
        schedule.stage_count(),
        schedule.show_count()
    );

    let names = StageNames::generate(schedule.stage_count(), &mut rng);
    print!("{}", render_schedule(&schedule, &names));
}
