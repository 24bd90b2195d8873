//! The four programs: prompt, calculate, render.
//!
//! Each function reads what it needs from the console, runs the
//! calculation from `primer_core` and returns the lines to print. None of
//! them retry: the first bad value ends the run with an error.

use std::io::{BufRead, Write};

use primer_core::calculations as calc;
use primer_core::calculations::{BallState, CalculatorInput, GravityInput, HeightSample, SumInput};
use primer_core::console::{HEIGHT_PROMPT, INTEGER_PROMPT, NUMBER_PROMPT};
use primer_core::format::general;
use primer_core::{Console, PrimerResult, Settings};

use crate::Report;

/// Line printed when a sample finds the ball on the ground
pub const ON_GROUND_LINE: &str = "The ball is on the ground";

/// Read a number, an operation selector and a second number; print the result.
pub fn calculator<R: BufRead, W: Write>(console: &mut Console<R, W>, settings: &Settings) -> PrimerResult<Report> {
    let x = console.prompt_f64("x", NUMBER_PROMPT)?;
    let operation = console.prompt_operation()?;
    let y = console.prompt_f64("y", NUMBER_PROMPT)?;

    let result = calc::calculator::calculate(&CalculatorInput { x, operation, y }, settings)?;
    let line = format!("The result is: {}", general(result.value, settings.precision));
    Report::new(vec![line], &result)
}

/// Read an initial height; print one line per sample time.
pub fn gravity<R: BufRead, W: Write>(console: &mut Console<R, W>, settings: &Settings) -> PrimerResult<Report> {
    let initial_height_m = console.prompt_f64("initial_height_m", HEIGHT_PROMPT)?;

    let result = calc::gravity::calculate(&GravityInput { initial_height_m }, settings)?;
    let lines = result
        .samples
        .iter()
        .map(|sample| height_line(sample, settings.precision))
        .collect();
    Report::new(lines, &result)
}

/// Print +inf, -inf and NaN produced by dividing by zero. Reads nothing.
pub fn inf_nan<R: BufRead, W: Write>(_console: &mut Console<R, W>, settings: &Settings) -> PrimerResult<Report> {
    let result = calc::special_values::calculate();
    let lines = result
        .values()
        .iter()
        .map(|v| general(v.value, settings.precision))
        .collect();
    Report::new(lines, &result)
}

/// Read two integers; print their sum.
pub fn sum<R: BufRead, W: Write>(console: &mut Console<R, W>, settings: &Settings) -> PrimerResult<Report> {
    let x = console.prompt_i32("x", INTEGER_PROMPT)?;
    let y = console.prompt_i32("y", INTEGER_PROMPT)?;

    let result = calc::sum::calculate(&SumInput { x, y }, settings)?;
    Report::new(vec![result.sum.to_string()], &result)
}

fn height_line(sample: &HeightSample, precision: usize) -> String {
    match sample.state {
        BallState::Airborne { height_m } => format!(
            "After {} seconds, the ball is at {} meters",
            general(sample.time_s, precision),
            general(height_m, precision)
        ),
        BallState::OnGround => ON_GROUND_LINE.to_string(),
    }
}
