//! Example: Laying out and rendering a sample day
//!
//! This example demonstrates the basic workflow of:
//! 1. Building a schedule from events
//! 2. Laying out clashing events side by side
//! 3. Rendering the placed events to SVG

use dayplan::{DayBuilder, Event, Schedule, TimeSpan};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minutes are measured from 9:00 with the default calendar
    let schedule: Schedule = [
        Event::new(30, 150),
        Event::new(540, 600),
        Event::new(560, 620),
        Event::new(610, 670),
    ]
    .into_iter()
    .collect();

    let builder = DayBuilder::default();

    println!("Laying out {} events...", schedule.len());
    let placed = builder.layout(&schedule)?;

    for event in &placed {
        println!(
            "{:>4}-{:<4} column {} of {}",
            event.start(),
            event.end(),
            event.column(),
            event.slots()
        );
    }

    println!("\nRendering to SVG...");
    let svg = builder.render_svg(&placed)?;
    println!("SVG length: {} bytes", svg.len());

    let output_path = "sample_day.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {output_path}");

    Ok(())
}
