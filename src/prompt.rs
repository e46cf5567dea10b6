use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

use anyhow::{bail, Result};
use dialoguer::{console, Confirm, Input, Select};

// dialoguer needs a terminal on both ends, piped sessions read plain lines
fn attended() -> bool {
    console::user_attended() && io::stdin().is_terminal()
}

/// Asks until the answer parses and passes `validate`
pub fn ask<T>(prompt: &str, validate: impl Fn(&T) -> Result<(), String>) -> Result<T>
where
    T: Clone + Display + FromStr,
    T::Err: Display,
{
    if attended() {
        let answer = Input::<T>::new()
            .with_prompt(prompt)
            .validate_with(|value: &T| validate(value))
            .interact_text()?;
        return Ok(answer);
    }
    read_valid(&mut io::stdin().lock(), &mut io::stdout(), prompt, validate)
}

/// Index of the chosen item. Piped sessions answer with the item number.
pub fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    if attended() {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        return Ok(selection);
    }
    let mut out = io::stdout();
    for (number, item) in items.iter().enumerate() {
        writeln!(out, " ({}) {}", number + 1, item)?;
    }
    let number = read_valid(&mut io::stdin().lock(), &mut out, prompt, |n: &usize| {
        match (1..=items.len()).contains(n) {
            true => Ok(()),
            false => Err(format!("Choose an option between 1 and {}", items.len())),
        }
    })?;
    Ok(number - 1)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    if attended() {
        let answer = Confirm::new().with_prompt(prompt).default(false).interact()?;
        return Ok(answer);
    }
    read_yes(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

/// Reads lines until one parses and passes `validate`, repeating the prompt each time
pub fn read_valid<T>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    validate: impl Fn(&T) -> Result<(), String>,
) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        write!(out, "{} ", prompt)?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer");
        }
        let answer = match line.trim().parse::<T>() {
            Ok(answer) => answer,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        match validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(message) => writeln!(out, "{}", message)?,
        }
    }
}

/// Only "yes" (or "y") plays again, closed input counts as no
pub fn read_yes(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<bool> {
    write!(out, "{} (yes/no) ", prompt)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim(), "yes" | "y"))
}
