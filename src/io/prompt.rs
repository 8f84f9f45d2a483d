//! Interactive collection of run settings over any line-oriented reader and writer

use crate::io::error::{MosaicError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Settings gathered from the user for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptedSettings {
    /// Source image to turn into a mosaic
    pub source: PathBuf,
    /// Pixels per tile edge in the source
    pub tile_size: u32,
    /// Output magnification
    pub scale: u32,
    /// Where the mosaic is written
    pub output: PathBuf,
}

/// Question-and-answer session that re-asks until each answer is usable
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` until `parse` accepts the trimmed answer
    ///
    /// # Errors
    ///
    /// Returns a prompt error if input ends or a stream fails
    pub fn ask<T, F>(&mut self, question: &str, retry: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask_line(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(retry)?;
        }
    }

    /// Ask for a strictly positive whole number
    ///
    /// # Errors
    ///
    /// Returns a prompt error if input ends or a stream fails
    pub fn ask_positive(&mut self, question: &str) -> Result<u32> {
        self.ask(question, "Invalid input. Try again.", |answer| {
            answer.parse::<u32>().ok().filter(|&value| value > 0)
        })
    }

    /// Gather source, tile size, scale and output, repeating until confirmed
    ///
    /// `is_image` decides whether an entered source path can be opened; the
    /// source question is repeated until it accepts.
    ///
    /// # Errors
    ///
    /// Returns a prompt error if input ends or a stream fails
    pub fn collect_settings<F>(&mut self, mut is_image: F) -> Result<PromptedSettings>
    where
        F: FnMut(&std::path::Path) -> bool,
    {
        loop {
            let source = self.ask(
                "What is the file name of the input image, including its extension?",
                "That file could not be opened as an image. Please try again.",
                |answer| {
                    let path = PathBuf::from(answer);
                    is_image(&path).then_some(path)
                },
            )?;
            let tile_size =
                self.ask_positive("How large (in pixels) should each tile of the input be?")?;
            let scale = self.ask_positive(
                "By what whole-number factor should the output be scaled up? (1 keeps the input resolution)",
            )?;
            let output = self.ask(
                "What should the output image be called, including its extension?",
                "Please enter a file name.",
                |answer| (!answer.is_empty()).then(|| PathBuf::from(answer)),
            )?;

            let settings = PromptedSettings {
                source,
                tile_size,
                scale,
                output,
            };

            let summary = format!(
                "\nAre these settings correct?\nTile size: {}px\nScale: {}x\nInput image: {}\nOutput image: {}\n(Press Enter to continue. Enter anything else to start over.)",
                settings.tile_size,
                settings.scale,
                settings.source.display(),
                settings.output.display()
            );
            if self.ask_line(&summary)?.is_empty() {
                return Ok(settings);
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)
    }

    fn ask_line(&mut self, question: &str) -> Result<String> {
        self.say(question)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            return Err(MosaicError::Prompt {
                reason: "input ended before all settings were given".to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

fn prompt_error(err: std::io::Error) -> MosaicError {
    MosaicError::Prompt {
        reason: err.to_string(),
    }
}
