use std::io::{self, BufRead};

use log::debug;
use pagewise_core::input::{InputEvent, InputProvider};

/// Which single-letter commands map to which events.
#[derive(Debug, Clone, Copy)]
pub struct KeyConfig {
    blank_activates: bool,
    case_sensitive: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            blank_activates: true,
            case_sensitive: false,
        }
    }
}

impl KeyConfig {
    pub const fn with_blank_activates(mut self, blank_activates: bool) -> Self {
        self.blank_activates = blank_activates;
        self
    }

    pub const fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Maps one typed line to an event.
///
/// `d`/`n` go forward, `a`/`p` go back and `m` activates. Surrounding
/// whitespace is ignored.
pub fn parse_key(line: &str, config: KeyConfig) -> Option<InputEvent> {
    let key = line.trim();
    if key.is_empty() {
        return config.blank_activates.then_some(InputEvent::Activate);
    }

    let folded;
    let key = if config.case_sensitive {
        key
    } else {
        folded = key.to_ascii_lowercase();
        folded.as_str()
    };

    match key {
        "d" | "n" => Some(InputEvent::Next),
        "a" | "p" => Some(InputEvent::Previous),
        "m" => Some(InputEvent::Activate),
        _ => None,
    }
}

/// Reads commands line by line from any buffered reader, usually stdin.
#[derive(Debug)]
pub struct KeyInput<R> {
    reader: R,
    config: KeyConfig,
    line: Vec<u8>,
}

impl<R: BufRead> KeyInput<R> {
    pub fn new(reader: R, config: KeyConfig) -> Self {
        Self {
            reader,
            config,
            line: Vec::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> InputProvider for KeyInput<R> {
    type Error = io::Error;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                debug!("input: end of stream");
                return Ok(None);
            }

            // Undecodable bytes become U+FFFD and the line is ignored below.
            let line = String::from_utf8_lossy(&self.line);
            match parse_key(&line, self.config) {
                Some(event) => return Ok(Some(event)),
                None => debug!("input: ignoring {:?}", line.trim_end()),
            }
        }
    }
}
