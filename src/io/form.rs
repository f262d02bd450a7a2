// src/io/form.rs

//! Line-based version of the calculator form.
//!
//! Asks for the three fields in turn; Enter on the last one triggers the
//! calculation. Errors are printed and the form goes back to the first
//! question. `q` or end of input closes it.

use crate::calculator::Calculator;
use crate::error::Result;
use crate::io::display;
use crate::model::RawInputs;
use std::io::{BufRead, Write};
use tracing::debug;

pub const DEMAND_PROMPT: &str = "How much fuel do you sell per year (in liters)?";
pub const ORDER_COST_PROMPT: &str = "How much does it cost to order a refill?";
pub const HOLDING_COST_PROMPT: &str = "How much does it cost to store a liter of fuel per year?";

/// Prints `prompt`, then reads one line. `None` means the user is done.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(output, "{} ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']).to_string();
    if matches!(line.trim(), "q" | "quit") {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Runs the form until the user quits. Returns the number of requests submitted.
pub fn run_form<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    mut input: R,
    mut output: W,
) -> Result<usize> {
    writeln!(output, "Wilson economic model calculator (q to quit)")?;
    let mut submitted = 0;

    loop {
        let Some(annual_demand) = ask(&mut input, &mut output, DEMAND_PROMPT)? else {
            break;
        };
        let Some(order_cost) = ask(&mut input, &mut output, ORDER_COST_PROMPT)? else {
            break;
        };
        let Some(holding_cost_rate) = ask(&mut input, &mut output, HOLDING_COST_PROMPT)? else {
            break;
        };

        let raw = RawInputs {
            annual_demand,
            order_cost,
            holding_cost_rate,
        };
        submitted += 1;

        match calculator.submit(&raw) {
            Ok(outcome) => {
                for line in display::result_lines(&outcome.solution) {
                    writeln!(output, "{}", line)?;
                }
            }
            Err(err) => {
                writeln!(output, "{}", err.user_message())?;
                continue;
            }
        }

        match calculator.export() {
            Ok(paths) => {
                for path in paths {
                    writeln!(output, "Wrote {}", path.display())?;
                }
            }
            Err(err) => writeln!(output, "{}", err.user_message())?,
        }
        writeln!(output)?;
    }

    debug!(submitted, "form closed");
    Ok(submitted)
}
