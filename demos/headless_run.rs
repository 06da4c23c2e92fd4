use planetesimal::*;

fn main() {
    let config = SimulationConfig::default();
    let mut simulation = Simulation64::new(config);
    simulation.set_frame_budget(Some(16.0));

    let initial_velocity = simulation.system_velocity();
    println!(
        "Requested {} bodies, placed {}",
        config.number_of_bodies,
        simulation.body_count()
    );

    let steps_per_frame = 3;
    for frame in 0..200 {
        simulation.simulate(steps_per_frame);
        if frame % 50 == 0 {
            let snapshot = RenderSnapshot::capture(&simulation);
            let largest = snapshot.iter().map(|body| body.radius).fold(0.0_f32, f32::max);
            println!(
                "{}: {} bodies, largest radius {:.1} m",
                format_elapsed(simulation.elapsed_time() as u64),
                snapshot.len(),
                largest
            );
        }
    }

    simulation.take_profile().report();

    let velocity = simulation.system_velocity();
    println!("System velocity: {:?} m/s", velocity);
    println!(
        "Velocity deviation: {:e} m/s",
        (velocity - initial_velocity).length()
    );

    let report = DriftReport::measure::<f32>(config, 600);
    println!(
        "f32 run: {} steps in {:.3} s, deviation {:e} m/s",
        report.steps,
        report.wall_time.as_secs_f64(),
        report.velocity_deviation()
    );
}
