// src/screen/terminal.rs
use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::{ChatScreen, QuickAction, ScreenEvents};
use crate::{error::SubmitRejected, message::Language, state::Phase};

const HELP: &str = "\
Type a message and press enter. Commands:
  /toggle              switch between english and hinglish
  /lang <language>     english or hinglish
  /location [place]    set your location, no argument clears it
  /earthquake /flood /fire /emergency   ask a common question
  /help                show this text
  /quit                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Say(String),
    Quick(QuickAction),
    Toggle,
    Lang(Language),
    Location(Option<String>),
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Say(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "quit" | "exit" => Command::Quit,
            "help" => Command::Help,
            "toggle" => Command::Toggle,
            "lang" => match arg.parse() {
                Ok(language) => Command::Lang(language),
                Err(err) => Command::Invalid(err.to_string()),
            },
            "location" if arg.is_empty() => Command::Location(None),
            "location" => Command::Location(Some(arg.to_string())),
            "earthquake" => Command::Quick(QuickAction::Earthquake),
            "flood" => Command::Quick(QuickAction::Flood),
            "fire" => Command::Quick(QuickAction::Fire),
            "emergency" => Command::Quick(QuickAction::Emergency),
            other => Command::Invalid(format!("unknown command /{}, try /help", other)),
        }
    }
}

/// Drives the screen from line input until `/quit` or end of input. At end
/// of input a reply still in flight is waited for and printed.
pub async fn run<R, W>(
    mut screen: ChatScreen,
    mut events: ScreenEvents,
    input: R,
    mut out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut shown = 0;

    screen.open();
    flush(&mut screen, &mut shown, &mut out)?;

    let input_closed = loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break true;
                };
                if !handle(&mut screen, Command::parse(&line), &mut out)? {
                    break false;
                }
            }
            Some(event) = events.recv() => {
                screen.apply(event);
            }
        }
        flush(&mut screen, &mut shown, &mut out)?;
    };

    // Piped input ends before the last reply does; wait for it. `/quit` abandons it.
    while input_closed && screen.phase() == Phase::Sending {
        let Some(event) = events.recv().await else {
            break;
        };
        screen.apply(event);
        flush(&mut screen, &mut shown, &mut out)?;
    }

    flush(&mut screen, &mut shown, &mut out)?;
    Ok(())
}

/// Returns false when the session should end.
fn handle<W: Write>(screen: &mut ChatScreen, command: Command, out: &mut W) -> Result<bool> {
    let submitted = match command {
        Command::Quit => return Ok(false),
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(true);
        }
        Command::Invalid(msg) => {
            writeln!(out, "! {}", msg)?;
            return Ok(true);
        }
        Command::Toggle => {
            screen.toggle_language();
            return Ok(true);
        }
        Command::Lang(language) => {
            screen.set_language(language);
            return Ok(true);
        }
        Command::Location(location) => {
            screen.set_location(location.as_deref());
            match &screen.preferences().location {
                Some(place) => writeln!(out, "! Location set to: {}", place)?,
                None => writeln!(out, "! Location cleared")?,
            }
            return Ok(true);
        }
        Command::Say(text) => screen.submit(&text),
        Command::Quick(action) => screen.quick_action(action),
    };

    if let Err(SubmitRejected::Busy) = submitted {
        writeln!(out, "! {}", SubmitRejected::Busy)?;
    }
    Ok(true)
}

/// Prints transcript entries not shown yet, then pending notices.
fn flush<W: Write>(screen: &mut ChatScreen, shown: &mut usize, out: &mut W) -> Result<()> {
    for message in screen.transcript().since(*shown) {
        writeln!(out, "{}\n", message.formatted())?;
    }
    *shown = screen.transcript().len();

    for notice in screen.take_notices() {
        writeln!(out, "! {}", notice)?;
    }
    out.flush()?;
    Ok(())
}
