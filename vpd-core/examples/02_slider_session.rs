//! Slider Session Example
//!
//! Replays a user session through the calculator: typing values, dragging
//! the VPD slider under each lock, and releasing it.
//!
//! ## What You'll Learn
//!
//! - Feeding host events into `Calculator`
//! - How the lock decides which field the slider rewrites
//! - Invalid flags during a drag and clamping on release
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_slider_session
//! ```

use vpd_core::{
    vpd_to_slider_position, Calculator, CalculatorState, Field, FixedTime, InputEvent,
    LockAffordance,
};

fn show(label: &str, state: &CalculatorState) {
    let flag = |invalid: bool| if invalid { " (invalid)" } else { "" };
    println!("{label}");
    println!(
        "  temperature: {:?}{}{}",
        state.temperature,
        state.unit,
        flag(state.temperature_invalid)
    );
    println!("  humidity:    {:?}%{}", state.humidity, flag(state.humidity_invalid));
    println!("  {}  (slider at {:.1})", state.vpd_label(), state.slider_position);
    println!("  lock:        {:?}\n", state.lock);
}

fn main() {
    println!("VPD Slider Session Example");
    println!("==========================\n");

    let mut calc = Calculator::new(FixedTime::new(0));

    show("Start", calc.state());

    calc.handle(InputEvent::temperature_text("78"));
    show("Typed 78°F", calc.state());

    calc.handle(InputEvent::humidity_text("55"));
    show("Typed 55% RH", calc.state());

    // Temperature locked: the slider rewrites humidity
    for target in [0.8, 1.2, 4.5] {
        calc.clock_mut().advance(16);
        calc.handle(InputEvent::SliderMoved(vpd_to_slider_position(target)));
        show(&format!("Dragged to {target} kPa"), calc.state());
    }

    calc.handle(InputEvent::SliderReleased);
    show("Released", calc.state());
    if let Some(message) = calc.advisory(Field::Humidity) {
        println!("  advisory: {message}\n");
    }

    // Humidity locked: the slider rewrites temperature
    calc.handle(InputEvent::LockToggled(LockAffordance::HumidityIcon));
    calc.handle(InputEvent::humidity_text("60"));
    calc.handle(InputEvent::SliderMoved(vpd_to_slider_position(1.0)));
    show("Humidity locked, dragged to 1.0 kPa", calc.state());

    calc.handle(InputEvent::SliderReleased);
    show("Released", calc.state());
}
