//! Standing waves — pluck a string and read its harmonic content.

use swingset::{substeps, swingset_wave, WaveParams, WaveString};

fn main() {
    let params = WaveParams::default();
    let mut string = WaveString::new(&params);

    println!("Wave String");
    println!("===========");
    println!(
        "tension {} N, mass {} kg/m, length {} m, {} samples",
        params.tension, params.mass, params.length, params.num_points
    );
    println!(
        "fundamental frequency: {:.2} Hz\n",
        string.fundamental_frequency()
    );

    // Pluck off-center so even harmonics show up too.
    string.pluck(0.25, 30.0);
    println!("plucked at 1/4 span, amplitude 30\n");

    println!("t(s)    max|y|    h1       h2       h3       h4");
    println!("------------------------------------------------");
    let mut time = 0.0;
    for frame in 0..=240 {
        if frame % 40 == 0 {
            let max = string
                .positions()
                .iter()
                .fold(0.0f64, |m, y| m.max(y.abs()));
            let spectrum = swingset_wave::analyze_harmonics(string.positions(), 4);
            println!(
                "{time:5.2}   {max:6.2}   {:6.3}   {:6.3}   {:6.3}   {:6.3}",
                spectrum[0], spectrum[1], spectrum[2], spectrum[3]
            );
        }
        for dt in substeps(1.0 / 60.0, 4) {
            string.update(dt);
            time += dt;
        }
    }

    println!("\nTheoretical node/antinode samples (harmonic 3, {} points):", params.num_points);
    println!("  nodes:     {:?}", swingset_wave::nodes(3, params.num_points));
    println!("  antinodes: {:?}", swingset_wave::antinodes(3, params.num_points));
}
