//! Interactive selection of the boost class whose spectrum is plotted

use crate::{
    numeric::{functions::to_float, Float},
    Result,
};

use eyre::{ensure, eyre, WrapErr};

use std::{
    fmt,
    io::{BufRead, Write},
};

/// Text of the prompt which asks for the boost class
pub const PROMPT: &str = "Input magnitude for d: ";

/// Requested squared magnitude |d|² of the total momentum quanta
///
/// Any number is accepted. Boost triples are selected by exact comparison of
/// their (integer) squared norm with this value, so a value like 2.5 or -1 is
/// legal and simply selects no boost at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoostClass {
    /// Requested |d|²
    pub squared_norm: Float,
}
//
impl BoostClass {
    /// Truth that a boost with the given integer squared norm belongs here
    pub fn contains(&self, squared_norm: i32) -> bool {
        to_float(squared_norm) == self.squared_norm
    }
}
//
impl fmt::Display for BoostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.squared_norm)
    }
}

/// Parse the user's answer to the prompt
pub fn parse_boost_class(answer: &str) -> Result<BoostClass> {
    let text = answer.trim();
    ensure!(!text.is_empty(), "No magnitude for d was provided");
    let squared_norm = text
        .parse::<Float>()
        .wrap_err_with(|| format!("Could not parse {text:?} as a magnitude for d"))?;
    ensure!(
        squared_norm.is_finite(),
        "The magnitude for d must be a finite number, got {text:?}"
    );
    Ok(BoostClass { squared_norm })
}

/// Print the prompt to `output`, then read and parse one line from `input`
pub fn prompt_boost_class(
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<BoostClass> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut answer = String::new();
    let bytes_read = input
        .read_line(&mut answer)
        .wrap_err("Failed to read the magnitude for d")?;
    if bytes_read == 0 {
        return Err(eyre!("Standard input was closed before a magnitude for d was provided"));
    }
    parse_boost_class(&answer)
}
